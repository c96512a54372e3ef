use std::sync::LazyLock;

use folio_models::contact::ContactMessage;

/// A complete message that passes every upstream gate.
pub static FOO: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    name: "Max Mustermann".into(),
    email: "max.mustermann@example.de".into(),
    subject: "Collaboration".into(),
    message: "Hello! I'd like to talk about a project.".into(),
});

/// A second complete message, distinct from [`FOO`] in every field.
pub static BAR: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    name: "Erika Musterfrau".into(),
    email: "erika.musterfrau@example.de".into(),
    subject: "Question about your stack".into(),
    message: "Which database are you using these days?".into(),
});

/// A half-filled draft, as left behind by an abandoned interaction.
pub static PARTIAL: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    name: "Max Mustermann".into(),
    email: String::new(),
    subject: String::new(),
    message: "I never finished this one.".into(),
});
