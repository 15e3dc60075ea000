//! Pantry store - owns the persisted pantry list
//!
//! The whole list lives as one JSON value under [`PANTRY_KEY`]. Every read
//! goes back to storage, and every mutation rewrites the full value and then
//! re-renders every subscribed view. Nothing is cached between calls.

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::PantryError;
use crate::core::models::{PantryItem, PantryList};
use crate::core::ports::{KeyValueStore, PantryView};

/// Storage key holding the serialized pantry list
pub const PANTRY_KEY: &str = "fittropolis_pantry";

/// What `load` does when the stored value cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Log a warning and treat the pantry as empty (default)
    #[default]
    #[serde(alias = "empty")]
    Reset,
    /// Return [`PantryError::MalformedData`]
    #[serde(alias = "error", alias = "strict")]
    Fail,
}

impl std::str::FromStr for CorruptPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reset" | "empty" => Ok(Self::Reset),
            "fail" | "error" | "strict" => Ok(Self::Fail),
            _ => Err(format!("Unknown corrupt-data policy: {s}. Use 'reset' or 'fail'")),
        }
    }
}

impl fmt::Display for CorruptPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reset => write!(f, "reset"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Durable CRUD over the pantry list
pub struct PantryStore<S> {
    storage: S,
    policy: CorruptPolicy,
    views: Vec<Box<dyn PantryView>>,
}

impl<S: KeyValueStore> PantryStore<S> {
    /// Create a store over `storage` with the default corrupt-data policy
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            policy: CorruptPolicy::default(),
            views: Vec::new(),
        }
    }

    /// Set the corrupt-data policy
    #[must_use]
    pub const fn with_policy(mut self, policy: CorruptPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register a view to be redrawn after every save and on `render`
    pub fn subscribe(&mut self, view: impl PantryView + 'static) {
        self.views.push(Box::new(view));
    }

    /// The underlying storage
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// The active corrupt-data policy
    #[must_use]
    pub const fn policy(&self) -> CorruptPolicy {
        self.policy
    }

    /// Load the current pantry list
    ///
    /// A missing value is an empty pantry. A value that does not decode is
    /// handled according to the store's [`CorruptPolicy`].
    pub fn load(&self) -> Result<PantryList, PantryError> {
        let Some(raw) = self.storage.get(PANTRY_KEY)? else {
            debug!("No pantry stored under {PANTRY_KEY}");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<PantryList>(&raw) {
            Ok(items) => {
                debug!("Loaded {} pantry item(s)", items.len());
                Ok(items)
            },
            Err(err) => match self.policy {
                CorruptPolicy::Reset => {
                    warn!("Stored pantry is malformed ({err}); treating it as empty");
                    Ok(Vec::new())
                },
                CorruptPolicy::Fail => Err(PantryError::MalformedData(err)),
            },
        }
    }

    /// Persist the full list, replacing what was stored, then re-render
    pub fn save(&self, items: &[PantryItem]) -> Result<(), PantryError> {
        let raw = serde_json::to_string(items).map_err(PantryError::Encode)?;
        self.storage.set(PANTRY_KEY, &raw)?;
        debug!("Saved {} pantry item(s)", items.len());

        self.notify(items);
        Ok(())
    }

    /// Append an item to the end of the pantry
    ///
    /// The item is stored as given; callers build it with
    /// [`PantryItem::new`], which trims and checks the name.
    pub fn add(&self, item: PantryItem) -> Result<(), PantryError> {
        let mut items = self.load()?;
        debug!("Adding {:?} at position {}", item.name, items.len());
        items.push(item);
        self.save(&items)
    }

    /// Remove the item at zero-based `index`
    ///
    /// An out-of-range index removes nothing and is not an error. The list is
    /// saved and re-rendered either way. Returns whether an item was removed.
    pub fn remove_at(&self, index: usize) -> Result<bool, PantryError> {
        let mut items = self.load()?;
        let removed = if index < items.len() {
            let item = items.remove(index);
            debug!("Removed {:?} from position {index}", item.name);
            true
        } else {
            warn!("No pantry item at position {index} ({} stored)", items.len());
            false
        };

        self.save(&items)?;
        Ok(removed)
    }

    /// Redraw every subscribed view from the persisted state
    pub fn render(&self) -> Result<(), PantryError> {
        let items = self.load()?;
        self.notify(&items);
        Ok(())
    }

    fn notify(&self, items: &[PantryItem]) {
        for view in &self.views {
            view.render(items);
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for PantryStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PantryStore")
            .field("storage", &self.storage)
            .field("policy", &self.policy)
            .field("views", &self.views.len())
            .finish()
    }
}
