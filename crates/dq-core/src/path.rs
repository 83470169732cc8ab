//! Path record: rooms entered during one session, for display only

use crate::mansion::RoomId;

/// Capacity-bounded list of entered rooms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord {
    rooms: Vec<RoomId>,
    capacity: usize,
}

impl PathRecord {
    pub fn new(capacity: usize) -> Self {
        Self {
            rooms: Vec::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Append `room`; silently dropped once the record is full
    pub fn record(&mut self, room: RoomId) -> bool {
        if self.rooms.len() >= self.capacity {
            return false;
        }
        self.rooms.push(room);
        true
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.rooms.len() >= self.capacity
    }
}
