use valence_nbt::Compound;

/// The kinds of item the mock surface knows about.
///
/// Real servers generate this enum from game data; a test double only needs
/// the handful of kinds its scenarios exercise.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub enum ItemKind {
    #[default]
    Air,
    Stone,
    Diamond,
    Book,
    WritableBook,
    WrittenBook,
}

impl ItemKind {
    /// Returns whether this kind of item can carry page-structured content.
    pub const fn is_book(self) -> bool {
        matches!(self, Self::Book | Self::WritableBook | Self::WrittenBook)
    }
}

/// A stack of items in an inventory.
#[derive(Clone, PartialEq, Debug)]
pub struct ItemStack {
    pub item: ItemKind,
    pub count: i8,
    pub nbt: Option<Compound>,
}

impl ItemStack {
    pub const STACK_MIN: i8 = 1;
    pub const STACK_MAX: i8 = 127;

    #[must_use]
    pub fn new(item: ItemKind, count: i8, nbt: Option<Compound>) -> Self {
        Self {
            item,
            count: count.clamp(Self::STACK_MIN, Self::STACK_MAX),
            nbt,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_count(mut self, count: i8) -> Self {
        self.set_count(count);
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: ItemKind) -> Self {
        self.item = item;
        self
    }

    #[must_use]
    pub fn with_nbt(mut self, nbt: impl Into<Option<Compound>>) -> Self {
        self.nbt = nbt.into();
        self
    }

    /// Gets the number of items in this stack.
    pub fn count(&self) -> i8 {
        self.count
    }

    /// Sets the number of items in this stack. Values are clamped to 1-127,
    /// which are the positive values accepted by clients.
    pub fn set_count(&mut self, count: i8) {
        self.count = count.clamp(Self::STACK_MIN, Self::STACK_MAX);
    }

    pub fn is_empty(&self) -> bool {
        self.item == ItemKind::Air || self.count <= 0
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::new(ItemKind::Air, 1, None)
    }
}
