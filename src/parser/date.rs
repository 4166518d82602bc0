use chrono::{Local, NaiveDate};

/// Long-form date printed on proposals, e.g. "August 23, 2025"
pub fn proposal_date_label(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Today's proposal date on the local clock
pub fn today_label() -> String {
    proposal_date_label(Local::now().date_naive())
}
