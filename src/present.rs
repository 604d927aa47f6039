//! Reply records for a chat front end. They carry only what a message embed
//! needs (title, colour, description and named fields) so any client library
//! can render them.

use std::fmt::{Display, Write};

use chrono::{Datelike, NaiveDate};

use crate::date::{self, korean_weekday_name};
use crate::fetch::CrawlError;
use crate::menu::RestaurantMenuResult;
use crate::parse::remove_excess_whitespace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    pub const RED: Self = Self(0x00E7_4C3C);
    pub const ORANGE: Self = Self(0x00E6_7E22);
    pub const DARK_RED: Self = Self(0x0099_2D22);

    /// A colour that changes from day to day.
    pub fn for_date(date: NaiveDate) -> Self {
        #[allow(clippy::cast_sign_loss)]
        let seed = date.num_days_from_ce() as u32;
        Self(seed.wrapping_mul(0x9E37_79B9) >> 8)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MenuEmbed {
    pub title: String,
    pub description: Option<String>,
    pub color: Color,
    pub fields: Vec<EmbedField>,
}

impl MenuEmbed {
    fn notice(title: &str, description: String, color: Color) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description),
            color,
            fields: Vec::new(),
        }
    }

    /// Plain text rendering for terminals.
    pub fn to_text(&self) -> String {
        let mut out = self.title.clone();
        if let Some(description) = &self.description {
            let _ = write!(out, "\n{description}");
        }
        for field in &self.fields {
            let _ = write!(out, "\n\n{}\n{}", field.name, field.value);
        }
        out
    }
}

pub fn menu_embed(result: &RestaurantMenuResult) -> MenuEmbed {
    let target = result.date();
    let title = format!(
        "📅 {} ({}) 충북대학교 학식 메뉴",
        target.format("%Y년 %m월 %d일"),
        korean_weekday_name(target)
    );
    let fields: Vec<EmbedField> = result
        .iter()
        .map(|menu| {
            let value = if menu.lines().is_empty() {
                "- 정보 없음".to_string()
            } else {
                menu.lines()
                    .iter()
                    .map(|line| format!("- {}", remove_excess_whitespace(line.as_str())))
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            EmbedField {
                name: format!("🍽️ {}", menu.name()),
                value,
                inline: false,
            }
        })
        .collect();
    let description = fields
        .is_empty()
        .then(|| "조회된 메뉴 정보가 없습니다.".to_string());
    MenuEmbed {
        title,
        description,
        color: Color::for_date(target),
        fields,
    }
}

pub fn invalid_date_embed(error: &date::Error) -> MenuEmbed {
    MenuEmbed::notice(
        "⚠️ 입력 오류",
        format!(
            "날짜를 이해할 수 없습니다: {error}\n\
             지원 형식: 'yyyy-mm-dd', 'yyyymmdd', 'mm-dd', 'mmdd'"
        ),
        Color::RED,
    )
}

pub fn crawl_failure_embed(error: &CrawlError) -> MenuEmbed {
    MenuEmbed::notice("🚫 메뉴 조회 실패", error.to_string(), Color::ORANGE)
}

pub fn system_error_embed(error: &dyn std::error::Error) -> MenuEmbed {
    MenuEmbed::notice(
        "🚨 시스템 오류",
        format!("예상치 못한 오류: {error}"),
        Color::DARK_RED,
    )
}
