/// Topic tag (non-alphanumeric characters stripped) followed by the fixed
/// platform tags. A topic with no alphanumeric characters contributes no tag.
pub fn derive_hashtags(topic: &str, platform_tags: &[String]) -> Vec<String> {
    let compact: String = topic.chars().filter(|c| c.is_alphanumeric()).collect();

    let mut tags = Vec::with_capacity(platform_tags.len() + 1);
    if !compact.is_empty() {
        tags.push(format!("#{compact}"));
    }
    tags.extend(platform_tags.iter().cloned());
    tags
}
