use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DiscordMessage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub embeds: Vec<Embed>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Embed {
    pub author: Option<EmbedAuthor>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<EmbedField>,
    pub footer: Option<EmbedFooter>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EmbedAuthor {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EmbedField {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EmbedFooter {
    #[serde(default)]
    pub text: String,
}

impl Embed {
    /// The embed's visible text glued together in display order with no
    /// separators, the way the client renders it into one block.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        if let Some(author) = &self.author {
            out.push_str(&author.name);
        }
        if let Some(title) = &self.title {
            out.push_str(title);
        }
        if let Some(description) = &self.description {
            out.push_str(description);
        }
        for field in &self.fields {
            out.push_str(&field.name);
            out.push_str(&field.value);
        }
        if let Some(footer) = &self.footer {
            out.push_str(&footer.text);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_list_with_missing_parts() {
        let body = r#"[
            {"id": "2", "content": "", "embeds": [{
                "author": {"name": "Word Bomb"},
                "title": "Your turn!",
                "fields": [{"name": "Letters", "value": "ING", "inline": true}],
                "footer": {"text": "Lives: 2"},
                "color": 16753920
            }]},
            {"id": "1", "content": "gl hf", "attachments": []}
        ]"#;
        let messages: Vec<DiscordMessage> = serde_json::from_str(body).unwrap();

        assert_eq!(messages.len(), 2);
        assert!(messages[1].embeds.is_empty());
        assert_eq!(
            messages[0].embeds[0].text_content(),
            "Word BombYour turn!LettersINGLives: 2"
        );
    }
}
