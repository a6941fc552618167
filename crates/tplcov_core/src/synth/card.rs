//! Default interactive message-card synthesizer.

use super::rules::{action_label_cn, color_for, event_label_cn, title_case};
use super::TemplateSynthesizer;
use crate::model::entry::TemplateEntry;
use crate::model::locale::Locale;
use serde_json::{json, Value};

struct CardLabels {
    repository: &'static str,
    action: &'static str,
    user: &'static str,
    button: &'static str,
}

const LABELS_EN: CardLabels = CardLabels {
    repository: "Repository:",
    action: "Action:",
    user: "User:",
    button: "View Details",
};

const LABELS_CN: CardLabels = CardLabels {
    repository: "仓库：",
    action: "操作：",
    user: "用户：",
    button: "查看详情",
};

/// Builds a generic card with repository, action and sender placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardSynthesizer;

impl CardSynthesizer {
    pub fn new() -> Self {
        Self
    }

    fn title(event: &str, tag: &str, locale: Locale) -> String {
        match locale {
            Locale::English if tag.is_empty() => format!("{} Event", title_case(event)),
            Locale::English => format!("{} {}", title_case(event), title_case(tag)),
            Locale::Chinese if tag.is_empty() => event_label_cn(event).to_string(),
            Locale::Chinese => format!("{} {}", event_label_cn(event), action_label_cn(tag)),
        }
    }

    fn card(title: &str, color: &str, labels: &CardLabels) -> Value {
        let body = format!(
            "**{}** {{{{repository_link_md}}}}\n**{}** {{{{action}}}}\n**{}** {{{{sender_link_md}}}}",
            labels.repository, labels.action, labels.user
        );
        json!({
            "msg_type": "interactive",
            "card": {
                "config": { "wide_screen_mode": true },
                "header": {
                    "title": { "tag": "plain_text", "content": format!("🔔 {title}") },
                    "template": color
                },
                "elements": [
                    { "tag": "div", "text": { "tag": "lark_md", "content": body } },
                    { "tag": "hr" },
                    {
                        "tag": "action",
                        "actions": [
                            {
                                "tag": "button",
                                "text": { "tag": "plain_text", "content": labels.button },
                                "url": "{{repository.html_url}}",
                                "type": "default"
                            }
                        ]
                    }
                ]
            }
        })
    }
}

impl TemplateSynthesizer for CardSynthesizer {
    fn synthesize(&self, event: &str, tag: &str, locale: Locale) -> TemplateEntry {
        let labels = match locale {
            Locale::English => &LABELS_EN,
            Locale::Chinese => &LABELS_CN,
        };
        let title = Self::title(event, tag, locale);
        let payload = Self::card(&title, color_for(tag).as_str(), labels);
        TemplateEntry::for_tag(tag, payload)
    }
}
