//! Mansion map: a binary tree of rooms
//!
//! Rooms live in an arena and refer to their two children by [`RoomId`].
//! There are no parent links, so the shape is a tree by construction:
//! [`Mansion::build`] refuses any layout where a room would be reachable
//! twice or not at all.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Index of a room inside its [`Mansion`]
///
/// Only a [`Mansion`] hands out ids, so callers cannot forge one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    /// Position of the room in pre-order
    pub fn index(self) -> usize {
        self.0
    }
}

/// One room definition, children referenced by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomDef {
    pub name: String,
    pub left: Option<String>,
    pub right: Option<String>,
    pub clue: Option<String>,
    pub suspect: Option<String>,
}

impl RoomDef {
    /// A room with no doors and no evidence
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn left(mut self, name: impl Into<String>) -> Self {
        self.left = Some(name.into());
        self
    }

    pub fn right(mut self, name: impl Into<String>) -> Self {
        self.right = Some(name.into());
        self
    }

    pub fn clue(mut self, text: impl Into<String>) -> Self {
        self.clue = Some(text.into());
        self
    }

    pub fn suspect(mut self, name: impl Into<String>) -> Self {
        self.suspect = Some(name.into());
        self
    }
}

/// Topology description consumed once by [`Mansion::build`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Name of the entry room
    pub root: String,
    /// Room definitions, in any order
    pub rooms: Vec<RoomDef>,
}

/// Evidence planted in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub text: String,
    /// Suspect the clue points at, if any
    pub suspect: Option<String>,
}

/// A node of the mansion tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub clue: Option<Clue>,
    /// True while the clue has not been picked up yet
    pub clue_pending: bool,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
}

impl Room {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The whole mansion, owned by one exploration session
#[derive(Debug, Clone)]
pub struct Mansion {
    rooms: Vec<Room>,
    root: RoomId,
}

/// Treat empty strings the same as missing ones
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Mansion {
    /// Build the tree described by `layout`
    ///
    /// Rooms are stored in pre-order starting at the root. Nothing is
    /// returned unless the whole layout is valid.
    pub fn build(layout: &Layout) -> Result<Self, LayoutError> {
        if layout.rooms.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut by_name: HashMap<&str, usize> = HashMap::with_capacity(layout.rooms.len());
        for (index, def) in layout.rooms.iter().enumerate() {
            if def.name.is_empty() {
                return Err(LayoutError::EmptyName { index });
            }
            if by_name.insert(def.name.as_str(), index).is_some() {
                return Err(LayoutError::DuplicateRoom {
                    name: def.name.clone(),
                });
            }
        }

        let root_def = *by_name
            .get(layout.root.as_str())
            .ok_or_else(|| LayoutError::UnknownRoot {
                name: layout.root.clone(),
            })?;

        // Pre-order walk over definitions; `placed[def]` holds the arena slot.
        let mut placed: Vec<Option<RoomId>> = Vec::new();
        placed.try_reserve_exact(layout.rooms.len())?;
        placed.resize(layout.rooms.len(), None);

        let mut order: Vec<usize> = Vec::new();
        order.try_reserve_exact(layout.rooms.len())?;

        let mut stack = vec![root_def];
        placed[root_def] = Some(RoomId(0));
        while let Some(def_index) = stack.pop() {
            order.push(def_index);
            let def = &layout.rooms[def_index];
            // Right is pushed first so the left subtree is numbered first.
            for child in [non_empty(&def.right), non_empty(&def.left)].into_iter().flatten() {
                let child_index =
                    *by_name
                        .get(child)
                        .ok_or_else(|| LayoutError::UnknownRoom {
                            parent: def.name.clone(),
                            child: child.to_string(),
                        })?;
                if placed[child_index].is_some() {
                    return Err(LayoutError::SharedRoom {
                        name: child.to_string(),
                    });
                }
                // Provisional mark; real ids are assigned from `order` below.
                placed[child_index] = Some(RoomId(usize::MAX));
                stack.push(child_index);
            }
        }

        if let Some(lost) = placed.iter().position(Option::is_none) {
            return Err(LayoutError::Unreachable {
                name: layout.rooms[lost].name.clone(),
            });
        }

        for (slot, &def_index) in order.iter().enumerate() {
            placed[def_index] = Some(RoomId(slot));
        }

        let mut rooms: Vec<Room> = Vec::new();
        rooms.try_reserve_exact(order.len())?;
        for &def_index in &order {
            let def = &layout.rooms[def_index];
            let slot_of = |name: Option<&str>| {
                name.and_then(|n| by_name.get(n))
                    .and_then(|&i| placed[i])
            };
            let clue = non_empty(&def.clue).map(|text| Clue {
                text: text.to_string(),
                suspect: non_empty(&def.suspect).map(str::to_string),
            });
            rooms.push(Room {
                name: def.name.clone(),
                clue_pending: clue.is_some(),
                clue,
                left: slot_of(non_empty(&def.left)),
                right: slot_of(non_empty(&def.right)),
            });
        }

        Ok(Self {
            rooms,
            root: RoomId(0),
        })
    }

    /// Entry room
    pub fn root(&self) -> RoomId {
        self.root
    }

    /// Number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Borrow a room
    ///
    /// Panics if `id` came from a larger mansion; use [`Mansion::get`] for
    /// ids of unknown origin.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Borrow a room, or `None` if `id` is out of range for this mansion
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    /// Left and right neighbours of `id`
    pub fn children(&self, id: RoomId) -> (Option<RoomId>, Option<RoomId>) {
        let room = self.room(id);
        (room.left, room.right)
    }

    pub fn is_leaf(&self, id: RoomId) -> bool {
        self.room(id).is_leaf()
    }

    /// Find a room by name
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.name == name).map(RoomId)
    }

    /// Room ids with every child listed before its parent
    pub fn post_order(&self) -> Vec<RoomId> {
        let mut out = Vec::with_capacity(self.rooms.len());
        let mut stack = vec![(self.root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                out.push(id);
                continue;
            }
            stack.push((id, true));
            let (left, right) = self.children(id);
            if let Some(r) = right {
                stack.push((r, false));
            }
            if let Some(l) = left {
                stack.push((l, false));
            }
        }
        out
    }

    /// Release every room, children before parents
    ///
    /// Returns the number of rooms released.
    pub fn teardown(self) -> usize {
        let order = self.post_order();
        let mut slots: Vec<Option<Room>> = self.rooms.into_iter().map(Some).collect();
        order
            .into_iter()
            .filter(|id| slots[id.0].take().is_some())
            .count()
    }
}
