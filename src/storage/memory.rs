//! In-memory clinic store
//!
//! All five collections sit behind one `RwLock`; records live for the
//! process lifetime only.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::{
    Booking, BookingDetails, Feedback, Notification, Practitioner, RecordCounts, Therapy,
};
use super::seed;

/// The raw collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicData {
    pub therapies: Vec<Therapy>,
    pub practitioners: Vec<Practitioner>,
    pub bookings: Vec<Booking>,
    pub notifications: Vec<Notification>,
    pub feedback: Vec<Feedback>,
}

/// Next free id: one past the largest id in use, 1 for an empty collection
fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> u32) -> u32 {
    items.iter().map(id_of).max().unwrap_or(0) + 1
}

impl ClinicData {
    pub fn therapy(&self, id: u32) -> Option<&Therapy> {
        self.therapies.iter().find(|t| t.id == id)
    }

    pub fn practitioner(&self, id: u32) -> Option<&Practitioner> {
        self.practitioners.iter().find(|p| p.id == id)
    }

    pub fn booking(&self, id: u32) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn booking_mut(&mut self, id: u32) -> Option<&mut Booking> {
        self.bookings.iter_mut().find(|b| b.id == id)
    }

    pub fn notification_mut(&mut self, id: u32) -> Option<&mut Notification> {
        self.notifications.iter_mut().find(|n| n.id == id)
    }

    /// Assign the next booking id and append; returns the stored record
    pub fn push_booking(&mut self, mut booking: Booking) -> Booking {
        booking.id = next_id(&self.bookings, |b| b.id);
        self.bookings.push(booking.clone());
        booking
    }

    pub fn push_notification(&mut self, mut notification: Notification) -> Notification {
        notification.id = next_id(&self.notifications, |n| n.id);
        self.notifications.push(notification.clone());
        notification
    }

    pub fn push_feedback(&mut self, mut feedback: Feedback) -> Feedback {
        feedback.id = next_id(&self.feedback, |f| f.id);
        self.feedback.push(feedback.clone());
        feedback
    }

    /// Join a booking with the therapy and practitioner it references
    pub fn details(&self, booking: &Booking) -> BookingDetails {
        BookingDetails {
            booking: booking.clone(),
            therapy: self.therapy(booking.therapy_id).cloned(),
            practitioner: self.practitioner(booking.practitioner_id).cloned(),
        }
    }

    pub fn counts(&self) -> RecordCounts {
        RecordCounts {
            therapies: self.therapies.len(),
            practitioners: self.practitioners.len(),
            bookings: self.bookings.len(),
            notifications: self.notifications.len(),
            feedback: self.feedback.len(),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<ClinicData>,
}

impl MemoryStore {
    pub fn new(data: ClinicData) -> Self {
        debug!("MemoryStore created with {:?}", data.counts());
        Self {
            data: RwLock::new(data),
        }
    }

    /// Store pre-filled with the demo dataset
    pub fn with_demo_data() -> Self {
        Self::new(seed::demo_data())
    }

    /// Run `f` under the read lock
    pub fn read<R>(&self, f: impl FnOnce(&ClinicData) -> R) -> R {
        let guard = self.data.read();
        f(&*guard)
    }

    /// Run `f` under the write lock; everything `f` does is seen atomically
    pub fn write<R>(&self, f: impl FnOnce(&mut ClinicData) -> R) -> R {
        let mut guard = self.data.write();
        f(&mut *guard)
    }

    pub fn therapies(&self) -> Vec<Therapy> {
        self.read(|d| d.therapies.clone())
    }

    pub fn therapy(&self, id: u32) -> Option<Therapy> {
        self.read(|d| d.therapy(id).cloned())
    }

    pub fn practitioners(&self) -> Vec<Practitioner> {
        self.read(|d| d.practitioners.clone())
    }

    pub fn practitioner(&self, id: u32) -> Option<Practitioner> {
        self.read(|d| d.practitioner(id).cloned())
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.read(|d| d.bookings.clone())
    }

    pub fn booking(&self, id: u32) -> Option<Booking> {
        self.read(|d| d.booking(id).cloned())
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.read(|d| d.notifications.clone())
    }

    pub fn feedback(&self) -> Vec<Feedback> {
        self.read(|d| d.feedback.clone())
    }

    pub fn counts(&self) -> RecordCounts {
        self.read(|d| d.counts())
    }

    /// Copy of every collection
    pub fn snapshot(&self) -> ClinicData {
        self.read(|d| d.clone())
    }
}
