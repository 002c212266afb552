//! Exclusive editor-instance lock.
//!
//! Only one annotation canvas may be live at a time. The lock is a scoped
//! resource handle: acquired on mount, released on drop, so teardown can
//! never leak the held flag the way an ambient global would.

use std::sync::atomic::{AtomicBool, Ordering};

static EDITOR_ACTIVE: AtomicBool = AtomicBool::new(false);

/// RAII handle proving exclusive ownership of the annotation editor.
#[derive(Debug)]
pub struct EditorLock {
    _private: (),
}

impl EditorLock {
    /// Try to acquire the editor lock. Returns `None` while another
    /// canvas instance holds it.
    pub fn acquire() -> Option<Self> {
        if EDITOR_ACTIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            Some(Self { _private: () })
        } else {
            log::warn!("annotation editor already active, refusing second instance");
            None
        }
    }
}

impl Drop for EditorLock {
    fn drop(&mut self) {
        EDITOR_ACTIVE.store(false, Ordering::Release);
    }
}
