//! The built-in mansion
//!
//! ```text
//!                 Hall de Entrada
//!                /               \
//!           Corredor           Sala de Estar
//!           /     \            /          \
//!     Biblioteca Sala de    Cozinha      Jardim
//!                Estudo      /   \
//!                       Despensa  Copa
//! ```

use dq_core::{Layout, RoomDef};

/// Static room entry
#[derive(Debug, Clone, Copy)]
pub struct RoomEntry {
    pub name: &'static str,
    pub left: Option<&'static str>,
    pub right: Option<&'static str>,
    pub clue: Option<&'static str>,
    pub suspect: Option<&'static str>,
}

impl RoomEntry {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            left: None,
            right: None,
            clue: None,
            suspect: None,
        }
    }

    const fn doors(mut self, left: &'static str, right: &'static str) -> Self {
        self.left = Some(left);
        self.right = Some(right);
        self
    }

    const fn evidence(mut self, clue: &'static str, suspect: &'static str) -> Self {
        self.clue = Some(clue);
        self.suspect = Some(suspect);
        self
    }

    /// Owned definition for the layout builder
    pub fn to_def(&self) -> RoomDef {
        RoomDef {
            name: self.name.to_string(),
            left: self.left.map(str::to_string),
            right: self.right.map(str::to_string),
            clue: self.clue.map(str::to_string),
            suspect: self.suspect.map(str::to_string),
        }
    }
}

/// Entry room of the built-in mansion
pub const MANSION_ROOT: &str = "Hall de Entrada";

/// Every room of the built-in mansion
pub const MANSION_ROOMS: &[RoomEntry] = &[
    RoomEntry::new("Hall de Entrada").doors("Corredor", "Sala de Estar"),
    RoomEntry::new("Corredor").doors("Biblioteca", "Sala de Estudo"),
    RoomEntry::new("Biblioteca").evidence("Manuscrito Antigo", "Professor X"),
    RoomEntry::new("Sala de Estudo"),
    RoomEntry::new("Sala de Estar").doors("Cozinha", "Jardim"),
    RoomEntry::new("Cozinha")
        .doors("Despensa", "Copa")
        .evidence("Pegada de Lama", "Jardineiro"),
    RoomEntry::new("Despensa").evidence("Chave Enferrujada", "Mordomo"),
    RoomEntry::new("Copa"),
    RoomEntry::new("Jardim").evidence("Pó de Folhas", "Jardineiro"),
];

/// Layout of the built-in mansion
pub fn default_layout() -> Layout {
    Layout {
        root: MANSION_ROOT.to_string(),
        rooms: MANSION_ROOMS.iter().map(RoomEntry::to_def).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dq_core::{Command, Explorer, Mansion, SessionOptions};

    #[test]
    fn test_default_layout_builds() {
        let mansion = Mansion::build(&default_layout()).unwrap();
        assert_eq!(mansion.len(), MANSION_ROOMS.len());
        assert_eq!(mansion.room(mansion.root()).name, MANSION_ROOT);
    }

    #[test]
    fn test_leaves() {
        let mansion = Mansion::build(&default_layout()).unwrap();
        let leaves: Vec<_> = mansion
            .post_order()
            .into_iter()
            .filter(|&id| mansion.is_leaf(id))
            .map(|id| mansion.room(id).name.as_str())
            .collect();
        assert_eq!(
            leaves,
            ["Biblioteca", "Sala de Estudo", "Despensa", "Copa", "Jardim"]
        );
    }

    #[test]
    fn test_every_clue_names_a_suspect() {
        for entry in MANSION_ROOMS {
            assert_eq!(entry.clue.is_some(), entry.suspect.is_some(), "{}", entry.name);
        }
    }

    #[test]
    fn test_kitchen_then_pantry() {
        let mansion = Mansion::build(&default_layout()).unwrap();
        let mut explorer = Explorer::new(mansion, SessionOptions::default()).unwrap();
        explorer.tick(Command::Right).unwrap();
        explorer.tick(Command::Left).unwrap();
        explorer.tick(Command::Left).unwrap();
        assert!(explorer.is_ended());
        assert_eq!(
            explorer.ledger().to_vec(),
            ["Chave Enferrujada", "Pegada de Lama"]
        );
        let mut cited = explorer.suspects().most_cited();
        cited.sort();
        assert_eq!(cited, ["Jardineiro", "Mordomo"]);
    }
}
