use crate::entities::{Container, Item};
use crate::util::assertions::instance_item_ids_correct;

#[derive(Debug, Clone)]
/// Instance of the 2D Bin Packing Problem: a set of items to be packed into as few identical bins as possible.
pub struct BP2Instance {
    /// Shape of every bin
    pub container: Container,
    /// The items to be packed, indexed by their id
    pub items: Vec<Item>,
}

impl BP2Instance {
    pub fn new(container: Container, items: Vec<Item>) -> Self {
        assert!(instance_item_ids_correct(&items));

        Self { container, items }
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn item_area(&self) -> u64 {
        self.items.iter().map(|item| item.area()).sum()
    }

    pub fn container_area(&self) -> u64 {
        self.container.area()
    }
}
