mod age;
mod facts;
mod report;

use chrono::{Local, NaiveDate};
use facts::FactsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arg = std::env::args()
        .nth(1)
        .ok_or("Usage: age-master <YYYY-MM-DD>")?;
    let birthdate = NaiveDate::parse_from_str(&arg, "%Y-%m-%d")
        .map_err(|e| format!("Invalid birth date {arg:?} (expected YYYY-MM-DD): {e}"))?;

    let today = Local::now().date_naive();
    if birthdate > today {
        return Err("Ngày sinh không thể ở trong tương lai!".into());
    }

    // The age result stands on its own; trivia is a best-effort augmentation.
    let result = age::compute_age(birthdate, today);

    let fun_facts = match FactsClient::new() {
        Ok(client) => match client.fun_facts(birthdate).await {
            Ok(facts) => Some(facts),
            Err(e) => {
                eprintln!(
                    "Warning: Đã tính xong tuổi, nhưng không thể tải thêm thông tin thú vị: {e:#}"
                );
                None
            }
        },
        Err(e) => {
            eprintln!("Warning: không thể tải thêm thông tin thú vị: {e:#}");
            None
        }
    };

    print!("{}", report::render_report(&result, fun_facts.as_ref()));

    Ok(())
}
