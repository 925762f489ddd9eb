//! Cross-reference sentence pointing at the datagrepper history of a topic.

use crate::normalize::StrippedTopic;

/// Two hyperlinked phrases: the history of this exact topic, and of every
/// topic in its category.
pub fn datagrepper_link(topic: &str, stripped: &StrippedTopic, base_url: &str) -> String {
    let category = stripped.category();
    let topic_link = format!("{}?topic={}", base_url, topic);
    let category_link = format!("{}?category={}", base_url, category);
    format!(
        "You can view the history of `messages with the {} topic <{}>`_ \
         or `all {} messages <{}>`_ in datagrepper.",
        stripped, topic_link, category, category_link
    )
}
