use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{BannerId, UNASSIGNED_ID};

/// A promotional tile. `image` names a blob stored by the image sink, or is
/// empty when nothing was uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,
    pub title: String,
    pub content: String,
    pub button: String,
    pub link: String,
    pub image: String,
}

impl Banner {
    pub fn is_new(&self) -> bool {
        self.id == UNASSIGNED_ID
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}
