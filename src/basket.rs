use crate::model::Item;

/// The items submitted for checkout, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    items: Vec<Item>,
}

impl Basket {
    pub fn builder() -> BasketBuilder {
        BasketBuilder::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Collects items one at a time; building with no items yields an empty basket.
#[derive(Debug, Default)]
pub struct BasketBuilder {
    items: Vec<Item>,
}

impl BasketBuilder {
    pub fn add_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn push(&mut self, item: Item) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn build(self) -> Basket {
        Basket { items: self.items }
    }
}

impl FromIterator<Item> for Basket {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Basket {
            items: iter.into_iter().collect(),
        }
    }
}
