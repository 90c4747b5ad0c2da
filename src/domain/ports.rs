use crate::domain::model::{index_by_id, Item, ItemMap};
use crate::utils::error::Result;

/// Anything that can hand out a list of items.
pub trait ItemSource {
    fn load_items(&self) -> Result<Vec<Item>>;

    fn load_item_map(&self) -> Result<ItemMap> {
        let items = self.load_items()?;
        Ok(index_by_id(&items))
    }
}

impl ItemSource for Vec<Item> {
    fn load_items(&self) -> Result<Vec<Item>> {
        Ok(self.clone())
    }
}
