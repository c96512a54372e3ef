use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use folio_core_contact_contracts::{ContactFormService, SurfaceService};
use folio_extern_contracts::relay::MockRelayApiService;
use folio_models::contact::{ContactField, ContactMessage};

use crate::ContactFormServiceImpl;

mod update_field;

type Sut = ContactFormServiceImpl<MockRelayApiService, CountingSurface>;

/// Close-signal double. The dismiss timer runs on a spawned task, where a
/// failed mock expectation could not fail the test, so close requests are
/// counted and asserted inline instead.
#[derive(Debug, Clone, Default)]
struct CountingSurface(Arc<AtomicUsize>);

impl CountingSurface {
    fn closes(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl SurfaceService for CountingSurface {
    fn request_close(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn fill(sut: &Sut, message: &ContactMessage) {
    for field in ContactField::ALL {
        sut.update_field(field, message.field(field).into());
    }
}
