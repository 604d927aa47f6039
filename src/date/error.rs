use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidDateFormat { input: String },
}

impl Error {
    pub fn invalid_date_format(input: &str) -> Self {
        Self::InvalidDateFormat {
            input: input.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat { input } => {
                write!(f, "'{input}'은(는) 인식할 수 없는 날짜 형식입니다.")
            }
        }
    }
}

impl std::error::Error for Error {}
