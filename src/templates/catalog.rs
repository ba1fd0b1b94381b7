//! Fixed registries of toast layouts and toast sounds.
//!
//! Both are built once on first use and never mutated afterwards.

use std::collections::HashMap;

/// One piece of a toast body: literal XML or the n-th supplied text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Field(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct ToastTemplateSpec {
    pub name: &'static str,
    pub required_fields: usize,
    pub body: &'static [Segment],
}

impl ToastTemplateSpec {
    /// Number of positional fields referenced by the body.
    pub fn field_slots(&self) -> usize {
        self.body
            .iter()
            .filter(|segment| matches!(segment, Segment::Field(_)))
            .count()
    }

    /// Substitute `fields` positionally into the body.
    ///
    /// Callers check arity first; a field index past the end renders empty.
    pub fn render(&self, fields: &[String]) -> String {
        let mut out = String::new();
        for segment in self.body {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(idx) => {
                    if let Some(value) = fields.get(*idx) {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    /// Plays once; toast keeps default duration.
    Single,
    /// Loops; toast must carry `duration="long"`.
    Looping,
}

#[derive(Debug, Clone, Copy)]
pub struct SoundSpec {
    pub name: &'static str,
    pub kind: SoundKind,
    pub audio: &'static str,
}

use self::Segment::{Field as F, Literal as L};

const TOAST_TEXT_01: &[Segment] = &[
    L(r#"<visual><binding template="ToastText01"><text id="1">"#), F(0),
    L("</text></binding></visual>"),
];
const TOAST_TEXT_02: &[Segment] = &[
    L(r#"<visual><binding template="ToastText02"><text id="1">"#), F(0),
    L(r#"</text><text id="2">"#), F(1),
    L("</text></binding></visual>"),
];
const TOAST_TEXT_03: &[Segment] = &[
    L(r#"<visual><binding template="ToastText03"><text id="1">"#), F(0),
    L(r#"</text><text id="2">"#), F(1),
    L("</text></binding></visual>"),
];
const TOAST_TEXT_04: &[Segment] = &[
    L(r#"<visual><binding template="ToastText04"><text id="1">"#), F(0),
    L(r#"</text><text id="2">"#), F(1),
    L(r#"</text><text id="3">"#), F(2),
    L("</text></binding></visual>"),
];
const TOAST_IMAGE_AND_TEXT_01: &[Segment] = &[
    L(r#"<visual><binding template="ToastImageAndText01"><image id="1" src=""#), F(0),
    L(r#"" alt=""#), F(1),
    L(r#""/><text id="1">"#), F(2),
    L("</text></binding></visual>"),
];
const TOAST_IMAGE_AND_TEXT_02: &[Segment] = &[
    L(r#"<visual><binding template="ToastImageAndText02"><image id="1" src=""#), F(0),
    L(r#"" alt=""#), F(1),
    L(r#""/><text id="1">"#), F(2),
    L(r#"</text><text id="2">"#), F(3),
    L("</text></binding></visual>"),
];
const TOAST_IMAGE_AND_TEXT_03: &[Segment] = &[
    L(r#"<visual><binding template="ToastImageAndText03"><image id="1" src=""#), F(0),
    L(r#"" alt=""#), F(1),
    L(r#""/><text id="1">"#), F(2),
    L(r#"</text><text id="2">"#), F(3),
    L("</text></binding></visual>"),
];
const TOAST_IMAGE_AND_TEXT_04: &[Segment] = &[
    L(r#"<visual><binding template="ToastImageAndText04"><image id="1" src=""#), F(0),
    L(r#"" alt=""#), F(1),
    L(r#""/><text id="1">"#), F(2),
    L(r#"</text><text id="2">"#), F(3),
    L(r#"</text><text id="3">"#), F(4),
    L("</text></binding></visual>"),
];

const TEMPLATES: &[ToastTemplateSpec] = &[
    ToastTemplateSpec { name: "ToastText01", required_fields: 1, body: TOAST_TEXT_01 },
    ToastTemplateSpec { name: "ToastText02", required_fields: 2, body: TOAST_TEXT_02 },
    ToastTemplateSpec { name: "ToastText03", required_fields: 2, body: TOAST_TEXT_03 },
    ToastTemplateSpec { name: "ToastText04", required_fields: 3, body: TOAST_TEXT_04 },
    ToastTemplateSpec { name: "ToastImageAndText01", required_fields: 3, body: TOAST_IMAGE_AND_TEXT_01 },
    ToastTemplateSpec { name: "ToastImageAndText02", required_fields: 4, body: TOAST_IMAGE_AND_TEXT_02 },
    ToastTemplateSpec { name: "ToastImageAndText03", required_fields: 4, body: TOAST_IMAGE_AND_TEXT_03 },
    ToastTemplateSpec { name: "ToastImageAndText04", required_fields: 5, body: TOAST_IMAGE_AND_TEXT_04 },
];

const SOUNDS: &[SoundSpec] = &[
    SoundSpec { name: "Silent", kind: SoundKind::Single, audio: r#"<audio silent="true" />"# },
    SoundSpec { name: "NotificationDefault", kind: SoundKind::Single, audio: r#"<audio src="ms-winsoundevent:Notification.Default" loop="false" />"# },
    SoundSpec { name: "NotificationIM", kind: SoundKind::Single, audio: r#"<audio src="ms-winsoundevent:Notification.IM" loop="false" />"# },
    SoundSpec { name: "NotificationMail", kind: SoundKind::Single, audio: r#"<audio src="ms-winsoundevent:Notification.Mail" loop="false" />"# },
    SoundSpec { name: "NotificationReminder", kind: SoundKind::Single, audio: r#"<audio src="ms-winsoundevent:Notification.Reminder" loop="false" />"# },
    SoundSpec { name: "NotificationSms", kind: SoundKind::Single, audio: r#"<audio src="ms-winsoundevent:Notification.SMS" loop="false" />"# },
    SoundSpec { name: "NotificationLoopingAlarm", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Alarm" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingAlarm2", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Alarm2" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingAlarm3", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Alarm3" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingAlarm4", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Alarm4" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingAlarm5", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Alarm5" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingAlarm6", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Alarm6" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingAlarm7", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Alarm7" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingAlarm8", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Alarm8" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingAlarm9", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Alarm9" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingAlarm10", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Alarm10" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingCall", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Call" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingCall2", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Call2" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingCall3", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Call3" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingCall4", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Call4" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingCall5", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Call5" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingCall6", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Call6" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingCall7", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Call7" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingCall8", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Call8" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingCall9", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Call9" loop="true" />"# },
    SoundSpec { name: "NotificationLoopingCall10", kind: SoundKind::Looping, audio: r#"<audio src="ms-winsoundevent:Notification.Looping.Call10" loop="true" />"# },
];

lazy_static::lazy_static! {
    pub static ref TOAST_TEMPLATES: HashMap<&'static str, ToastTemplateSpec> =
        TEMPLATES.iter().map(|spec| (spec.name, *spec)).collect();

    pub static ref SINGLE_SOUNDS: HashMap<&'static str, SoundSpec> = SOUNDS
        .iter()
        .filter(|spec| spec.kind == SoundKind::Single)
        .map(|spec| (spec.name, *spec))
        .collect();

    pub static ref LOOPING_SOUNDS: HashMap<&'static str, SoundSpec> = SOUNDS
        .iter()
        .filter(|spec| spec.kind == SoundKind::Looping)
        .map(|spec| (spec.name, *spec))
        .collect();
}

/// Look up a sound, single-shot registry first.
pub fn find_sound(name: &str) -> Option<&'static SoundSpec> {
    SINGLE_SOUNDS.get(name).or_else(|| LOOPING_SOUNDS.get(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_arity_matches_body_slots() {
        assert_eq!(TOAST_TEMPLATES.len(), 8);
        for spec in TOAST_TEMPLATES.values() {
            assert_eq!(spec.required_fields, spec.field_slots(), "template {}", spec.name);
        }
    }

    #[test]
    fn field_indexes_are_dense_and_ordered() {
        for spec in TOAST_TEMPLATES.values() {
            let indexes: Vec<usize> = spec
                .body
                .iter()
                .filter_map(|segment| match segment {
                    Segment::Field(idx) => Some(*idx),
                    Segment::Literal(_) => None,
                })
                .collect();
            let expected: Vec<usize> = (0..spec.required_fields).collect();
            assert_eq!(indexes, expected, "template {}", spec.name);
        }
    }

    #[test]
    fn sound_registries_have_expected_sizes() {
        assert_eq!(SINGLE_SOUNDS.len(), 6);
        assert_eq!(LOOPING_SOUNDS.len(), 20);
        assert!(LOOPING_SOUNDS.values().all(|s| s.audio.contains(r#"loop="true""#)));
        assert!(find_sound("NotificationSms").is_some());
        assert!(find_sound("NotificationLoopingCall10").is_some());
        assert!(find_sound("Beep").is_none());
    }

    #[test]
    fn renders_image_template_positionally() {
        let spec = TOAST_TEMPLATES["ToastImageAndText01"];
        let out = spec.render(&["a.png".to_owned(), "alt".to_owned(), "hello".to_owned()]);
        assert_eq!(
            out,
            r#"<visual><binding template="ToastImageAndText01"><image id="1" src="a.png" alt="alt"/><text id="1">hello</text></binding></visual>"#
        );
    }
}
