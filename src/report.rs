//! Terminal rendering of the age result and its optional trivia augmentation.

use crate::age::AgeResult;
use crate::facts::FunFacts;

const ALIGN_WIDTH: usize = 44;

/// Renders the full report. `facts` is `None` when the trivia fetch failed or
/// was unavailable; the age sections are printed either way.
pub fn render_report(age: &AgeResult, facts: Option<&FunFacts>) -> String {
    let mut out = String::new();

    out.push_str(&build_header_line("Tuổi Chính Xác"));
    out.push_str(&build_stat_row("Năm", &age.years.to_string()));
    out.push_str(&build_stat_row("Tháng", &age.months.to_string()));
    out.push_str(&build_stat_row("Tuần", &age.weeks.to_string()));
    out.push_str(&build_stat_row("Ngày", &age.days.to_string()));
    out.push('\n');

    out.push_str(&build_header_line("Hành trình Tích lũy"));
    out.push_str(&build_stat_row("Tổng số Ngày", &group_thousands(age.total_days)));
    out.push_str(&build_stat_row("Tổng số Giờ", &group_thousands(age.total_hours)));
    out.push_str(&build_stat_row("Tổng số Phút", &group_thousands(age.total_minutes)));
    out.push('\n');

    out.push_str(&build_header_line("Cung Hoàng Đạo"));
    out.push_str(age.zodiac_sign);
    out.push('\n');

    if let Some(facts) = facts {
        out.push('\n');
        out.push_str(&build_header_line("Bản chất Tính cách"));
        out.push_str(&format!("\"{}\"\n\n", facts.personality_traits));

        out.push_str(&build_header_line("Vào Ngày này..."));
        for (i, event) in facts.historical_events.iter().enumerate() {
            out.push_str(&format!("  {}. {event}\n", i + 1));
        }
        out.push('\n');

        out.push_str(&build_header_line("Bạn cùng Ngày sinh"));
        for person in &facts.famous_birthdays {
            out.push_str(&format!("  • {person}\n"));
        }
        out.push('\n');

        out.push_str(&build_header_line("Lời khuyên Hoàng đạo"));
        out.push_str(&format!("{}\n", facts.zodiac_wisdom));
    }

    out
}

fn build_header_line(label: &str) -> String {
    let base = format!("{label} ");
    let dash_count = ALIGN_WIDTH.saturating_sub(base.chars().count()) + 2;
    format!("{base}{}\n", "-".repeat(dash_count))
}

fn build_stat_row(key: &str, value: &str) -> String {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = ALIGN_WIDTH.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    format!("{key_part}{dots}{value}\n")
}

/// Groups digits with "." (vi-VN separator): 12345678 → "12.345.678".
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
