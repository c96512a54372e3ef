use folio_core_contact_contracts::ContactFormService;
use folio_demo::contact::FOO;
use folio_models::{contact::ContactField, submission::SubmissionState};
use pretty_assertions::assert_eq;

use crate::tests::{fill, Sut};

#[test]
fn last_write_wins() {
    // Arrange
    let sut = Sut::default();

    // Act
    sut.update_field(ContactField::Name, "Max".into());
    sut.update_field(ContactField::Email, "max.mustermann@example.de".into());
    sut.update_field(ContactField::Name, "Max Mustermann".into());

    // Assert
    let snapshot = sut.snapshot();
    assert_eq!(snapshot.draft.field(ContactField::Name), "Max Mustermann");
    assert_eq!(
        snapshot.draft.field(ContactField::Email),
        "max.mustermann@example.de"
    );
    assert_eq!(snapshot.draft.field(ContactField::Subject), "");
    assert_eq!(snapshot.draft.field(ContactField::Message), "");
    assert_eq!(snapshot.state, SubmissionState::Idle);
}

#[test]
fn accepts_any_string() {
    // Arrange
    let sut = Sut::default();
    fill(&sut, &FOO);

    // Act
    sut.update_field(ContactField::Message, String::new());
    sut.update_field(ContactField::Email, "not an email".into());

    // Assert
    let draft = sut.snapshot().draft;
    assert_eq!(draft.field(ContactField::Message), "");
    assert_eq!(draft.field(ContactField::Email), "not an email");
    assert_eq!(draft.field(ContactField::Name), FOO.field(ContactField::Name));
}

#[tokio::test]
async fn notifies_subscribers() {
    // Arrange
    let sut = Sut::default();
    let mut receiver = sut.subscribe();

    // Act
    sut.update_field(ContactField::Subject, "Hello".into());

    // Assert
    receiver.changed().await.unwrap();
    let snapshot = receiver.borrow_and_update();
    assert_eq!(snapshot.draft.field(ContactField::Subject), "Hello");
}
