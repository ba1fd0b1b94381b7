use tracing::error;

use crate::errors::{WnsError, WnsResult};
use crate::templates::catalog::{find_sound, SoundKind, ToastTemplateSpec, TOAST_TEMPLATES};
use crate::templates::{Notification, NotificationKind, XML_DECLARATION};

pub const LONG_DURATION: &str = r#" duration="long""#;

/// Toast notification assembled from a registered layout, its text fields
/// and an optional sound. Template, text and sound may be set in any order;
/// consistency is checked by `build()`.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    template: Option<&'static ToastTemplateSpec>,
    text: Vec<String>,
    sound: &'static str,
    duration: &'static str,
    output: String,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_template(&mut self, name: &str) -> WnsResult<()> {
        match TOAST_TEMPLATES.get(name) {
            Some(spec) => {
                self.template = Some(spec);
                Ok(())
            }
            None => {
                error!(template = name, "couldn't find requested toast template");
                Err(WnsError::UnknownTemplate(name.to_owned()))
            }
        }
    }

    /// Store text fields in order; their count must match the template.
    pub fn set_text<I, S>(&mut self, fields: I) -> WnsResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = self.template.ok_or_else(|| {
            error!("toast template was not selected before setting text");
            WnsError::TemplateNotSelected
        })?;
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        check_arity(spec, fields.len())?;
        self.text = fields;
        Ok(())
    }

    /// Select a sound. Looping sounds switch the toast to long duration,
    /// single-shot sounds reset it. Unknown names leave the toast untouched.
    pub fn set_sound(&mut self, name: &str) -> WnsResult<()> {
        let spec = find_sound(name).ok_or_else(|| {
            error!(sound = name, "couldn't find requested toast sound");
            WnsError::UnknownSound(name.to_owned())
        })?;
        self.sound = spec.audio;
        self.duration = match spec.kind {
            SoundKind::Single => "",
            SoundKind::Looping => LONG_DURATION,
        };
        Ok(())
    }

    pub fn template_name(&self) -> Option<&'static str> {
        self.template.map(|spec| spec.name)
    }

    pub fn required_fields(&self) -> Option<usize> {
        self.template.map(|spec| spec.required_fields)
    }

    pub fn duration(&self) -> &str {
        self.duration
    }

    pub fn sound(&self) -> &str {
        self.sound
    }
}

fn check_arity(spec: &ToastTemplateSpec, supplied: usize) -> WnsResult<()> {
    if spec.required_fields != supplied {
        error!(
            template = spec.name,
            expected = spec.required_fields,
            supplied,
            "text field count mismatches toast template"
        );
        return Err(WnsError::ArityMismatch {
            expected: spec.required_fields,
            supplied,
        });
    }
    Ok(())
}

impl Notification for Toast {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Toast
    }

    /// Render the toast. Any previous output is dropped first, so a toast
    /// that fails to rebuild can no longer be sent.
    fn build(&mut self) -> WnsResult<()> {
        self.output.clear();
        let spec = self.template.ok_or_else(|| {
            error!("toast template was not selected");
            WnsError::TemplateNotSelected
        })?;
        check_arity(spec, self.text.len())?;

        let body = spec.render(&self.text);
        self.output = format!(
            "{XML_DECLARATION}<toast{}>{}{}</toast>",
            self.duration, body, self.sound
        );
        Ok(())
    }

    fn output(&self) -> &str {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("f{i}")).collect()
    }

    #[test]
    fn exact_arity_builds_for_every_template() {
        for (name, spec) in TOAST_TEMPLATES.iter() {
            let n = spec.required_fields;

            let mut toast = Toast::new();
            toast.set_template(name).unwrap();
            assert_eq!(toast.required_fields(), Some(n));
            toast.set_text(fields(n)).unwrap();
            toast.build().unwrap();
            assert!(toast.is_built());

            let mut toast = Toast::new();
            toast.set_template(name).unwrap();
            assert!(matches!(
                toast.set_text(fields(n + 1)),
                Err(WnsError::ArityMismatch { .. })
            ));
            assert!(matches!(
                toast.set_text(fields(n - 1)),
                Err(WnsError::ArityMismatch { .. })
            ));
            assert!(matches!(toast.build(), Err(WnsError::ArityMismatch { .. })));
            assert!(!toast.is_built());
        }
    }

    #[test]
    fn unknown_template_is_rejected() {
        let mut toast = Toast::new();
        assert!(matches!(
            toast.set_template("ToastText05"),
            Err(WnsError::UnknownTemplate(_))
        ));
        assert_eq!(toast.template_name(), None);
    }

    #[test]
    fn text_before_template_fails() {
        let mut toast = Toast::new();
        assert!(matches!(
            toast.set_text(["hello"]),
            Err(WnsError::TemplateNotSelected)
        ));
        assert!(matches!(toast.build(), Err(WnsError::TemplateNotSelected)));
    }

    #[test]
    fn switching_template_rechecks_arity_at_build() {
        let mut toast = Toast::new();
        toast.set_template("ToastText01").unwrap();
        toast.set_text(["one"]).unwrap();
        toast.build().unwrap();
        assert!(toast.is_built());

        toast.set_template("ToastText02").unwrap();
        assert!(matches!(
            toast.build(),
            Err(WnsError::ArityMismatch { expected: 2, supplied: 1 })
        ));
        // the ToastText01 payload must not survive the failed rebuild
        assert!(!toast.is_built());
        assert_eq!(toast.output(), "");
    }

    #[test]
    fn sound_controls_duration() {
        let mut toast = Toast::new();
        toast.set_sound("NotificationLoopingAlarm3").unwrap();
        assert_eq!(toast.duration(), LONG_DURATION);

        assert!(matches!(toast.set_sound("Nope"), Err(WnsError::UnknownSound(_))));
        assert_eq!(toast.duration(), LONG_DURATION);
        assert!(toast.sound().contains("Looping.Alarm3"));

        toast.set_sound("NotificationMail").unwrap();
        assert_eq!(toast.duration(), "");
        assert!(toast.sound().contains("Notification.Mail"));
    }

    #[test]
    fn renders_full_toast() {
        let mut toast = Toast::new();
        toast.set_sound("NotificationLoopingCall").unwrap();
        toast.set_template("ToastText02").unwrap();
        toast.set_text(["Hi", "there"]).unwrap();
        toast.build().unwrap();
        assert_eq!(
            toast.output(),
            concat!(
                r#"<?xml version="1.0" encoding="utf-8"?><toast duration="long">"#,
                r#"<visual><binding template="ToastText02"><text id="1">Hi</text><text id="2">there</text></binding></visual>"#,
                r#"<audio src="ms-winsoundevent:Notification.Looping.Call" loop="true" /></toast>"#,
            )
        );
    }

    #[test]
    fn renders_without_sound() {
        let mut toast = Toast::new();
        toast.set_template("ToastText01").unwrap();
        toast.set_text(["x"]).unwrap();
        toast.build().unwrap();
        assert_eq!(
            toast.output(),
            r#"<?xml version="1.0" encoding="utf-8"?><toast><visual><binding template="ToastText01"><text id="1">x</text></binding></visual></toast>"#
        );
    }
}
