//! Component style registry
//!
//! Each UI element kind owns a [`ComponentStyleDescriptor`]: a base fragment
//! that is always applied plus named variant, size and state fragments.
//!
//! A [`StyleRegistry`] can only be obtained from
//! [`StyleRegistryBuilder::build`], which validates every descriptor. The
//! built registry has no mutating API, so it can be shared freely across
//! threads by reference or behind an `Arc`.
//!
//! ```rust
//! use design_system::registry::{
//!     ComponentKind, ComponentStyleDescriptor, ModifierCategory, StyleRegistry,
//! };
//! use design_system::style::StyleFragment;
//!
//! let registry = StyleRegistry::builder()
//!     .register(
//!         ComponentKind::Badge,
//!         ComponentStyleDescriptor::new(StyleFragment::new().padding(2.0))
//!             .variant("info", StyleFragment::new().background_color("rgba(0, 0, 255, 0.25)")),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let found = registry.get_fragment(ComponentKind::Badge, ModifierCategory::Variant, "info");
//! assert!(found.unwrap().is_some());
//! let missing = registry.get_fragment(ComponentKind::Badge, ModifierCategory::Size, "xl");
//! assert!(missing.unwrap().is_none());
//! ```

use crate::error::{ConfigError, Result};
use crate::style::StyleFragment;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use tracing::info;

// =============================================================================
// Component Kinds
// =============================================================================

/// Every UI element kind with a registered style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// Pressable button surface
    Button,
    /// Button label
    ButtonText,
    /// Content card
    Card,
    /// Text input field
    Input,
    /// Label above an input
    InputLabel,
    /// Helper line below an input
    InputHelperText,
    /// Error line below an input
    InputErrorText,
    /// Dimmed layer behind a modal
    ModalBackdrop,
    /// Modal panel
    ModalContainer,
    /// Modal title row
    ModalHeader,
    /// Modal title text
    ModalTitle,
    /// Modal body
    ModalContent,
    /// Modal action row
    ModalFooter,
    /// Bottom tab bar
    TabBar,
    /// One tab in the tab bar
    TabBarItem,
    /// Tab label text
    TabBarLabel,
    /// Side drawer panel
    Drawer,
    /// Drawer row
    DrawerItem,
    /// Drawer row label
    DrawerLabel,
    /// Screen header bar
    NavHeader,
    /// Screen header title
    NavHeaderTitle,
    /// List wrapper
    ListContainer,
    /// List row
    ListItem,
    /// Divider between rows
    ListSeparator,
    /// Row title text
    ListTitle,
    /// Row subtitle text
    ListSubtitle,
    /// Status pill
    Badge,
    /// Badge label
    BadgeText,
    /// Inline alert / toast
    Alert,
    /// Alert title text
    AlertTitle,
    /// Alert body text
    AlertMessage,
    /// Alert icon slot
    AlertIcon,
    /// Switch track
    Toggle,
    /// Switch thumb
    ToggleThumb,
    /// Checkbox box
    Checkbox,
    /// Checkbox tick
    CheckboxCheckmark,
    /// Progress track
    Progress,
    /// Tooltip bubble
    Tooltip,
    /// Tooltip pointer
    TooltipArrow,
    /// Tooltip text
    TooltipText,
}

impl ComponentKind {
    /// Every kind, in declaration order
    pub const ALL: [ComponentKind; 40] = [
        ComponentKind::Button,
        ComponentKind::ButtonText,
        ComponentKind::Card,
        ComponentKind::Input,
        ComponentKind::InputLabel,
        ComponentKind::InputHelperText,
        ComponentKind::InputErrorText,
        ComponentKind::ModalBackdrop,
        ComponentKind::ModalContainer,
        ComponentKind::ModalHeader,
        ComponentKind::ModalTitle,
        ComponentKind::ModalContent,
        ComponentKind::ModalFooter,
        ComponentKind::TabBar,
        ComponentKind::TabBarItem,
        ComponentKind::TabBarLabel,
        ComponentKind::Drawer,
        ComponentKind::DrawerItem,
        ComponentKind::DrawerLabel,
        ComponentKind::NavHeader,
        ComponentKind::NavHeaderTitle,
        ComponentKind::ListContainer,
        ComponentKind::ListItem,
        ComponentKind::ListSeparator,
        ComponentKind::ListTitle,
        ComponentKind::ListSubtitle,
        ComponentKind::Badge,
        ComponentKind::BadgeText,
        ComponentKind::Alert,
        ComponentKind::AlertTitle,
        ComponentKind::AlertMessage,
        ComponentKind::AlertIcon,
        ComponentKind::Toggle,
        ComponentKind::ToggleThumb,
        ComponentKind::Checkbox,
        ComponentKind::CheckboxCheckmark,
        ComponentKind::Progress,
        ComponentKind::Tooltip,
        ComponentKind::TooltipArrow,
        ComponentKind::TooltipText,
    ];

    /// Kind name in kebab-case
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::ButtonText => "button-text",
            ComponentKind::Card => "card",
            ComponentKind::Input => "input",
            ComponentKind::InputLabel => "input-label",
            ComponentKind::InputHelperText => "input-helper-text",
            ComponentKind::InputErrorText => "input-error-text",
            ComponentKind::ModalBackdrop => "modal-backdrop",
            ComponentKind::ModalContainer => "modal-container",
            ComponentKind::ModalHeader => "modal-header",
            ComponentKind::ModalTitle => "modal-title",
            ComponentKind::ModalContent => "modal-content",
            ComponentKind::ModalFooter => "modal-footer",
            ComponentKind::TabBar => "tab-bar",
            ComponentKind::TabBarItem => "tab-bar-item",
            ComponentKind::TabBarLabel => "tab-bar-label",
            ComponentKind::Drawer => "drawer",
            ComponentKind::DrawerItem => "drawer-item",
            ComponentKind::DrawerLabel => "drawer-label",
            ComponentKind::NavHeader => "nav-header",
            ComponentKind::NavHeaderTitle => "nav-header-title",
            ComponentKind::ListContainer => "list-container",
            ComponentKind::ListItem => "list-item",
            ComponentKind::ListSeparator => "list-separator",
            ComponentKind::ListTitle => "list-title",
            ComponentKind::ListSubtitle => "list-subtitle",
            ComponentKind::Badge => "badge",
            ComponentKind::BadgeText => "badge-text",
            ComponentKind::Alert => "alert",
            ComponentKind::AlertTitle => "alert-title",
            ComponentKind::AlertMessage => "alert-message",
            ComponentKind::AlertIcon => "alert-icon",
            ComponentKind::Toggle => "toggle",
            ComponentKind::ToggleThumb => "toggle-thumb",
            ComponentKind::Checkbox => "checkbox",
            ComponentKind::CheckboxCheckmark => "checkbox-checkmark",
            ComponentKind::Progress => "progress",
            ComponentKind::Tooltip => "tooltip",
            ComponentKind::TooltipArrow => "tooltip-arrow",
            ComponentKind::TooltipText => "tooltip-text",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKind(s.to_string()))
    }
}

// =============================================================================
// Modifiers
// =============================================================================

/// Modifier categories, applied in caller order on top of the base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierCategory {
    /// Visual variant (primary, error, raised, ...)
    Variant,
    /// Size step (xs ... xl)
    Size,
    /// Interaction or data state (focused, disabled, ...)
    State,
}

impl ModifierCategory {
    /// Every category
    pub const ALL: [ModifierCategory; 3] = [
        ModifierCategory::Variant,
        ModifierCategory::Size,
        ModifierCategory::State,
    ];

    /// Category name
    pub fn as_str(&self) -> &'static str {
        match self {
            ModifierCategory::Variant => "variant",
            ModifierCategory::Size => "size",
            ModifierCategory::State => "state",
        }
    }
}

impl fmt::Display for ModifierCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModifierCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "variant" => Ok(ModifierCategory::Variant),
            "size" => Ok(ModifierCategory::Size),
            "state" => Ok(ModifierCategory::State),
            _ => Err(ConfigError::UnknownCategory(s.to_string())),
        }
    }
}

/// A `(category, name)` pair selecting an override fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifier<'a> {
    /// Which table to look in
    pub category: ModifierCategory,
    /// Entry name within that table
    pub name: &'a str,
}

impl<'a> Modifier<'a> {
    /// Create a modifier
    pub fn new(category: ModifierCategory, name: &'a str) -> Self {
        Self { category, name }
    }

    /// Variant modifier
    pub fn variant(name: &'a str) -> Self {
        Self::new(ModifierCategory::Variant, name)
    }

    /// Size modifier
    pub fn size(name: &'a str) -> Self {
        Self::new(ModifierCategory::Size, name)
    }

    /// State modifier
    pub fn state(name: &'a str) -> Self {
        Self::new(ModifierCategory::State, name)
    }
}

impl fmt::Display for Modifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.category, self.name)
    }
}

// =============================================================================
// Descriptor
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum DescriptorIssue {
    Duplicate(ModifierCategory, String),
    EmptyName(ModifierCategory),
}

/// Base plus named modifier fragments for one kind
#[derive(Debug, Clone, Default)]
pub struct ComponentStyleDescriptor {
    base: StyleFragment,
    variants: BTreeMap<String, StyleFragment>,
    sizes: BTreeMap<String, StyleFragment>,
    states: BTreeMap<String, StyleFragment>,
    issues: Vec<DescriptorIssue>,
}

impl ComponentStyleDescriptor {
    /// Create a descriptor with the given base
    pub fn new(base: StyleFragment) -> Self {
        Self {
            base,
            ..Default::default()
        }
    }

    /// Add a modifier fragment
    ///
    /// A repeated or empty name is recorded and reported by
    /// [`StyleRegistryBuilder::build`].
    pub fn modifier(
        mut self,
        category: ModifierCategory,
        name: impl Into<String>,
        fragment: StyleFragment,
    ) -> Self {
        let name = name.into();
        if name.is_empty() {
            self.issues.push(DescriptorIssue::EmptyName(category));
            return self;
        }
        let table = self.table_mut(category);
        if table.contains_key(&name) {
            self.issues.push(DescriptorIssue::Duplicate(category, name));
        } else {
            table.insert(name, fragment);
        }
        self
    }

    /// Add a variant fragment
    pub fn variant(self, name: impl Into<String>, fragment: StyleFragment) -> Self {
        self.modifier(ModifierCategory::Variant, name, fragment)
    }

    /// Add a size fragment
    pub fn size(self, name: impl Into<String>, fragment: StyleFragment) -> Self {
        self.modifier(ModifierCategory::Size, name, fragment)
    }

    /// Add a state fragment
    pub fn state(self, name: impl Into<String>, fragment: StyleFragment) -> Self {
        self.modifier(ModifierCategory::State, name, fragment)
    }

    /// The always-applied fragment
    pub fn base(&self) -> &StyleFragment {
        &self.base
    }

    /// Look up a modifier fragment; `None` when the name is not defined
    pub fn fragment(&self, category: ModifierCategory, name: &str) -> Option<&StyleFragment> {
        self.table(category).get(name)
    }

    /// Names defined in a category, sorted
    pub fn names(&self, category: ModifierCategory) -> impl Iterator<Item = &str> {
        self.table(category).keys().map(String::as_str)
    }

    /// Insert or replace a modifier; returns true when an entry was replaced
    pub(crate) fn upsert(
        &mut self,
        category: ModifierCategory,
        name: String,
        fragment: StyleFragment,
    ) -> bool {
        if name.is_empty() {
            self.issues.push(DescriptorIssue::EmptyName(category));
            return false;
        }
        self.table_mut(category).insert(name, fragment).is_some()
    }

    /// Apply `f` to the base and every modifier fragment
    pub(crate) fn for_each_fragment_mut(&mut self, mut f: impl FnMut(&mut StyleFragment)) {
        f(&mut self.base);
        for table in [&mut self.variants, &mut self.sizes, &mut self.states] {
            table.values_mut().for_each(&mut f);
        }
    }

    fn validate(&self, kind: ComponentKind) -> Result<()> {
        match self.issues.first() {
            None => Ok(()),
            Some(DescriptorIssue::Duplicate(category, name)) => Err(ConfigError::DuplicateModifier {
                kind,
                category: *category,
                name: name.clone(),
            }),
            Some(DescriptorIssue::EmptyName(category)) => Err(ConfigError::EmptyModifierName {
                kind,
                category: *category,
            }),
        }
    }

    fn table(&self, category: ModifierCategory) -> &BTreeMap<String, StyleFragment> {
        match category {
            ModifierCategory::Variant => &self.variants,
            ModifierCategory::Size => &self.sizes,
            ModifierCategory::State => &self.states,
        }
    }

    fn table_mut(&mut self, category: ModifierCategory) -> &mut BTreeMap<String, StyleFragment> {
        match category {
            ModifierCategory::Variant => &mut self.variants,
            ModifierCategory::Size => &mut self.sizes,
            ModifierCategory::State => &mut self.states,
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Collects descriptors; [`build`](Self::build) validates them
#[derive(Debug, Default)]
pub struct StyleRegistryBuilder {
    entries: Vec<(ComponentKind, ComponentStyleDescriptor)>,
}

impl StyleRegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the descriptor for a kind
    ///
    /// Registering a kind a second time is reported by `build`.
    pub fn register(mut self, kind: ComponentKind, descriptor: ComponentStyleDescriptor) -> Self {
        self.entries.push((kind, descriptor));
        self
    }

    /// Mutable access to the first descriptor registered for `kind`
    pub(crate) fn descriptor_mut(
        &mut self,
        kind: ComponentKind,
    ) -> Result<&mut ComponentStyleDescriptor> {
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == kind)
            .map(|(_, descriptor)| descriptor)
            .ok_or(ConfigError::UnregisteredKind(kind))
    }

    /// Apply `f` to every fragment of every descriptor
    pub(crate) fn for_each_fragment_mut(&mut self, mut f: impl FnMut(&mut StyleFragment)) {
        for (_, descriptor) in &mut self.entries {
            descriptor.for_each_fragment_mut(&mut f);
        }
    }

    /// Validate every descriptor and freeze the registry
    pub fn build(self) -> Result<StyleRegistry> {
        let mut seen = HashSet::new();
        let mut descriptors = BTreeMap::new();

        for (kind, descriptor) in self.entries {
            if !seen.insert(kind) {
                return Err(ConfigError::DuplicateKind(kind));
            }
            descriptor.validate(kind)?;
            descriptors.insert(kind, descriptor);
        }

        info!("Style registry built with {} component kinds", descriptors.len());
        Ok(StyleRegistry { descriptors })
    }
}

/// Immutable map from component kind to its descriptor
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    descriptors: BTreeMap<ComponentKind, ComponentStyleDescriptor>,
}

impl StyleRegistry {
    /// Start building a registry
    pub fn builder() -> StyleRegistryBuilder {
        StyleRegistryBuilder::new()
    }

    /// Descriptor for a kind
    pub fn descriptor(&self, kind: ComponentKind) -> Result<&ComponentStyleDescriptor> {
        self.descriptors
            .get(&kind)
            .ok_or(ConfigError::UnregisteredKind(kind))
    }

    /// Base fragment for a kind
    pub fn base(&self, kind: ComponentKind) -> Result<&StyleFragment> {
        self.descriptor(kind).map(ComponentStyleDescriptor::base)
    }

    /// Look up one modifier fragment
    ///
    /// `Ok(None)` means the kind exists but defines no such modifier, which
    /// is a normal outcome. An unregistered kind is an error.
    pub fn get_fragment(
        &self,
        kind: ComponentKind,
        category: ModifierCategory,
        name: &str,
    ) -> Result<Option<&StyleFragment>> {
        Ok(self.descriptor(kind)?.fragment(category, name))
    }

    /// Whether a kind is registered
    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.descriptors.contains_key(&kind)
    }

    /// Registered kinds, in declaration order
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.descriptors.keys().copied()
    }

    /// Number of registered kinds
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no kind is registered
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
