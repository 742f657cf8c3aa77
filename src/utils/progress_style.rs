use indicatif::ProgressStyle;

const ONLY_MESSAGE_TEMPLATE: &str = "{spinner} {wide_msg}";
const COUNTER_TEMPLATE: &str = "{spinner} {msg:30} {pos:>5} records";

pub struct ProgressStyleTemplate;

impl ProgressStyleTemplate {
    pub fn only_message() -> ProgressStyle {
        ProgressStyle::with_template(ONLY_MESSAGE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn record_counter() -> ProgressStyle {
        ProgressStyle::with_template(COUNTER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}
