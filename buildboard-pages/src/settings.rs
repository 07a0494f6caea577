use buildboard_database::{Profile, ProfileUpdate};
use buildboard_utils::html::escape;
use serde::Deserialize;

use crate::PageMeta;
use crate::layout::page_shell;
use crate::messages::PROFILE_UPDATED;

pub const META: PageMeta = PageMeta {
    path: "/settings",
    title: "Settings",
    description: "Edit your builder profile.",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    ProfileInformation,
    SocialLinks,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::ProfileInformation => "Profile Information",
            Section::SocialLinks => "Social Links",
        }
    }
}

pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub multiline: bool,
    pub section: Section,
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "full_name",
        label: "Full Name",
        placeholder: "Your name",
        multiline: false,
        section: Section::ProfileInformation,
    },
    FieldSpec {
        name: "username",
        label: "Username",
        placeholder: "username",
        multiline: false,
        section: Section::ProfileInformation,
    },
    FieldSpec {
        name: "bio",
        label: "Bio",
        placeholder: "Tell us about yourself...",
        multiline: true,
        section: Section::ProfileInformation,
    },
    FieldSpec {
        name: "website",
        label: "Website",
        placeholder: "https://yourwebsite.com",
        multiline: false,
        section: Section::SocialLinks,
    },
    FieldSpec {
        name: "twitter_username",
        label: "Twitter",
        placeholder: "@username",
        multiline: false,
        section: Section::SocialLinks,
    },
    FieldSpec {
        name: "github_username",
        label: "GitHub",
        placeholder: "username",
        multiline: false,
        section: Section::SocialLinks,
    },
    FieldSpec {
        name: "linkedin_url",
        label: "LinkedIn",
        placeholder: "https://linkedin.com/in/username",
        multiline: false,
        section: Section::SocialLinks,
    },
];

/// Editable profile fields as submitted by the settings form.
///
/// Fields missing from a submission deserialize as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsForm {
    pub full_name: String,
    pub username: String,
    pub bio: String,
    pub website: String,
    pub twitter_username: String,
    pub github_username: String,
    pub linkedin_url: String,
}

impl SettingsForm {
    pub fn from_profile(profile: &Profile) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            full_name: text(&profile.full_name),
            username: profile.username.clone(),
            bio: text(&profile.bio),
            website: text(&profile.website),
            twitter_username: text(&profile.twitter_username),
            github_username: text(&profile.github_username),
            linkedin_url: text(&profile.linkedin_url),
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        let value = match name {
            "full_name" => &self.full_name,
            "username" => &self.username,
            "bio" => &self.bio,
            "website" => &self.website,
            "twitter_username" => &self.twitter_username,
            "github_username" => &self.github_username,
            "linkedin_url" => &self.linkedin_url,
            _ => return None,
        };
        Some(value.as_str())
    }
}

impl From<SettingsForm> for ProfileUpdate {
    fn from(form: SettingsForm) -> Self {
        Self {
            full_name: form.full_name,
            username: form.username,
            bio: form.bio,
            website: form.website,
            twitter_username: form.twitter_username,
            github_username: form.github_username,
            linkedin_url: form.linkedin_url,
        }
    }
}

/// Outcome line shown under the form after a load or submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsMessage {
    Success,
    Error(String),
}

impl SettingsMessage {
    /// Map an update outcome (`Ok(matched)` or the backend's error text).
    ///
    /// Only a backend error is a failure; an update that matched no row is not.
    pub fn from_update(outcome: Result<bool, String>) -> Self {
        match outcome {
            Ok(_) => SettingsMessage::Success,
            Err(text) => SettingsMessage::Error(text),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            SettingsMessage::Success => PROFILE_UPDATED,
            SettingsMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SettingsMessage::Error(_))
    }
}

pub fn render(form: &SettingsForm, message: Option<&SettingsMessage>) -> String {
    let mut body = String::new();
    body.push_str("<section class=\"settings\">\n<h1>Settings</h1>\n");
    body.push_str(&format!(
        "<form method=\"post\" action=\"{}\">\n",
        META.path
    ));

    for section in [Section::ProfileInformation, Section::SocialLinks] {
        body.push_str(&format!(
            "<fieldset class=\"card\">\n<legend>{}</legend>\n",
            section.title()
        ));
        for field in FIELDS.iter().filter(|field| field.section == section) {
            body.push_str(&render_field(field, form.value(field.name).unwrap_or_default()));
        }
        body.push_str("</fieldset>\n");
    }

    if let Some(message) = message {
        let class = if message.is_error() {
            "message message-error"
        } else {
            "message message-success"
        };
        body.push_str(&format!(
            "<p class=\"{class}\">{}</p>\n",
            escape(message.text())
        ));
    }

    body.push_str("<button type=\"submit\">Save Changes</button>\n</form>\n</section>");
    page_shell(&META, &body)
}

fn render_field(field: &FieldSpec, value: &str) -> String {
    let input = if field.multiline {
        format!(
            "<textarea id=\"{name}\" name=\"{name}\" placeholder=\"{placeholder}\">{value}</textarea>",
            name = field.name,
            placeholder = escape(field.placeholder),
            value = escape(value),
        )
    } else {
        format!(
            "<input id=\"{name}\" name=\"{name}\" type=\"text\" placeholder=\"{placeholder}\" value=\"{value}\">",
            name = field.name,
            placeholder = escape(field.placeholder),
            value = escape(value),
        )
    };

    format!(
        "<label for=\"{}\">{}</label>\n{}\n",
        field.name, field.label, input
    )
}

#[cfg(test)]
mod tests {
    use buildboard_database::ProfileUpdate;

    use super::{FIELDS, Section, SettingsForm, SettingsMessage, render};
    use crate::fixtures::profile;

    #[test]
    fn form_loads_missing_fields_as_empty() {
        let mut stored = profile("ada", Some(10));
        stored.full_name = Some("Ada Lovelace".to_owned());
        stored.github_username = Some("ada-l".to_owned());

        let form = SettingsForm::from_profile(&stored);
        assert_eq!(form.full_name, "Ada Lovelace");
        assert_eq!(form.username, "ada");
        assert_eq!(form.github_username, "ada-l");
        assert_eq!(form.bio, "");
        assert_eq!(form.website, "");
        assert_eq!(form.linkedin_url, "");
    }

    #[test]
    fn every_field_has_a_value_accessor() {
        let form = SettingsForm::default();
        for field in FIELDS {
            assert_eq!(form.value(field.name), Some(""), "{}", field.name);
        }
        assert_eq!(form.value("total_score"), None);
    }

    #[test]
    fn sections_group_fields_like_the_form() {
        let profile_info: Vec<_> = FIELDS
            .iter()
            .filter(|f| f.section == Section::ProfileInformation)
            .map(|f| f.name)
            .collect();
        assert_eq!(profile_info, ["full_name", "username", "bio"]);
        assert_eq!(FIELDS.len(), 7);
    }

    #[test]
    fn update_copies_values_verbatim() {
        let form = SettingsForm {
            full_name: " Ada ".to_owned(),
            username: "ada".to_owned(),
            ..SettingsForm::default()
        };

        let update = ProfileUpdate::from(form);
        assert_eq!(update.full_name, " Ada ");
        assert_eq!(update.username, "ada");
        assert_eq!(update.bio, "");
    }

    #[test]
    fn update_outcomes_map_to_messages() {
        assert_eq!(SettingsMessage::from_update(Ok(true)), SettingsMessage::Success);
        assert_eq!(SettingsMessage::from_update(Ok(false)), SettingsMessage::Success);
        assert_eq!(
            SettingsMessage::from_update(Ok(false)).text(),
            "Profile updated successfully!"
        );

        let err = SettingsMessage::from_update(Err("duplicate key value".to_owned()));
        assert!(err.is_error());
        assert_eq!(err.text(), "duplicate key value");
    }

    #[test]
    fn unchanged_submit_renders_success_only() {
        let form = SettingsForm::from_profile(&profile("ada", Some(1)));
        let html = render(&form, Some(&SettingsMessage::Success));

        assert!(html.contains("<p class=\"message message-success\">Profile updated successfully!</p>"));
        assert!(!html.contains("message-error"));
        assert!(html.contains("name=\"username\" type=\"text\" placeholder=\"username\" value=\"ada\""));
    }

    #[test]
    fn renders_sections_and_escapes_values() {
        let form = SettingsForm {
            bio: "</textarea><script>".to_owned(),
            website: "\"><b>".to_owned(),
            ..SettingsForm::default()
        };
        let html = render(&form, Some(&SettingsMessage::Error("bad <input>".to_owned())));

        assert!(html.contains("<legend>Profile Information</legend>"));
        assert!(html.contains("<legend>Social Links</legend>"));
        assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;</textarea>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;b&gt;\""));
        assert!(html.contains("<p class=\"message message-error\">bad &lt;input&gt;</p>"));
        assert!(html.contains("<button type=\"submit\">Save Changes</button>"));
    }

    #[test]
    fn no_message_before_submit() {
        let html = render(&SettingsForm::default(), None);
        assert!(!html.contains("class=\"message"));
        assert!(html.contains("<form method=\"post\" action=\"/settings\">"));
    }
}
