use std::cmp::Ordering;
use std::fmt;

use eframe::egui::{Align2, Color32, Margin, Ui};

use super::defaults::{CellOverrides, TextStyle};
use super::sorting::{compare_missing_last, SortOrder};

/// Width policy of a column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Width {
    /// Absolute width in points.
    Fixed(f32),

    /// Share of the width left after all fixed columns were subtracted.
    Fraction(f32),
}

impl Width {
    /// Always this many points wide.
    pub fn fixed(points: f32) -> Self {
        if !(points >= 0.0) {
            log_or_panic!("fixed column width must be non-negative, got {}", points);
            return Self::Fixed(0.0);
        }
        Self::Fixed(points)
    }

    /// Take `fraction` (in `0..=1`) of the remaining width.
    pub fn fraction(fraction: f32) -> Self {
        if !(0.0..=1.0).contains(&fraction) {
            log_or_panic!("column width fraction must lie in 0..=1, got {}", fraction);
            return Self::Fraction(unit_fraction(fraction));
        }
        Self::Fraction(fraction)
    }
}

/// `fraction` clamped to `0..=1`, with NaN read as zero.
pub(crate) fn unit_fraction(fraction: f32) -> f32 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Cell click capability of a column.
pub struct Clickable<'a, T> {
    enabled: bool,
    on_click: Box<dyn Fn(&T) + 'a>,
}

impl<'a, T> Clickable<'a, T> {
    pub fn new(on_click: impl Fn(&T) + 'a) -> Self {
        Self {
            enabled: true,
            on_click: Box::new(on_click),
        }
    }

    #[inline]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Run the handler for `item`. Returns whether it ran.
    pub(crate) fn fire(&self, item: &T) -> bool {
        if self.enabled {
            (self.on_click)(item);
        }
        self.enabled
    }
}

type Comparator<'a, T> = Box<dyn Fn(&T, &T, SortOrder) -> Ordering + 'a>;

/// Sort capability of a column: an ordering over the table's items.
pub struct Sortable<'a, T> {
    enabled: bool,
    compare: Comparator<'a, T>,
}

impl<'a, T> Sortable<'a, T> {
    /// Sort with a total ordering; descending reverses it.
    pub fn new(compare: impl Fn(&T, &T) -> Ordering + 'a) -> Self {
        Self::from_comparator(Box::new(move |a: &T, b: &T, order: SortOrder| {
            order.apply(compare(a, b))
        }))
    }

    /// Sort by a key every item has.
    pub fn by_key<K: Ord>(key: impl Fn(&T) -> K + 'a) -> Self {
        Self::from_comparator(Box::new(move |a: &T, b: &T, order: SortOrder| {
            order.apply(key(a).cmp(&key(b)))
        }))
    }

    /// Sort by a key some items lack. Items without a key always come last.
    pub fn by_optional_key<K: Ord>(key: impl Fn(&T) -> Option<K> + 'a) -> Self {
        Self::from_comparator(Box::new(move |a: &T, b: &T, order: SortOrder| {
            compare_missing_last(key(a), key(b), order)
        }))
    }

    fn from_comparator(compare: Comparator<'a, T>) -> Self {
        Self {
            enabled: true,
            compare,
        }
    }

    #[inline]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn compare(&self, a: &T, b: &T, order: SortOrder) -> Ordering {
        (self.compare)(a, b, order)
    }
}

/// What goes into the header cell of a column.
pub(crate) enum Header<'a> {
    /// The column name.
    Name,
    Text(String),
    Custom(Box<dyn Fn(&mut Ui) + 'a>),
}

/// One column of a [`super::TableConfig`].
///
/// The index is assigned when the column is registered and never changes,
/// hidden columns keep theirs.
#[must_use = "register the column with `TableConfig::column`"]
pub struct Column<'a, T> {
    index: usize,
    name: String,
    width: Width,
    visible: bool,
    overrides: CellOverrides,
    clickable: Option<Clickable<'a, T>>,
    sortable: Option<Sortable<'a, T>>,
    header: Header<'a>,
    content: Box<dyn Fn(&mut Ui, &T) + 'a>,
}

impl<'a, T> Column<'a, T> {
    pub fn new(name: impl Into<String>, width: Width, content: impl Fn(&mut Ui, &T) + 'a) -> Self {
        Self {
            index: 0,
            name: name.into(),
            width,
            visible: true,
            overrides: CellOverrides::default(),
            clickable: None,
            sortable: None,
            header: Header::Name,
            content: Box::new(content),
        }
    }

    #[inline]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[inline]
    pub fn alignment(mut self, alignment: Align2) -> Self {
        self.overrides.alignment = Some(alignment);
        self
    }

    #[inline]
    pub fn padding(mut self, padding: impl Into<Margin>) -> Self {
        self.overrides.padding = Some(padding.into());
        self
    }

    #[inline]
    pub fn background(mut self, background: Color32) -> Self {
        self.overrides.background = Some(background);
        self
    }

    #[inline]
    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.overrides.text_style = Some(text_style);
        self
    }

    #[inline]
    pub fn clickable(mut self, clickable: Clickable<'a, T>) -> Self {
        self.clickable = Some(clickable);
        self
    }

    /// Shorthand for an enabled [`Clickable`].
    #[inline]
    pub fn on_click(self, on_click: impl Fn(&T) + 'a) -> Self {
        self.clickable(Clickable::new(on_click))
    }

    #[inline]
    pub fn sortable(mut self, sortable: Sortable<'a, T>) -> Self {
        self.sortable = Some(sortable);
        self
    }

    /// Render the header with a callback instead of the column name.
    #[inline]
    pub fn header(mut self, header: impl Fn(&mut Ui) + 'a) -> Self {
        self.header = Header::Custom(Box::new(header));
        self
    }

    /// Show `text` in the header instead of the column name.
    #[inline]
    pub fn header_text(mut self, text: impl Into<String>) -> Self {
        self.header = Header::Text(text.into());
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn overrides(&self) -> &CellOverrides {
        &self.overrides
    }

    pub fn click_capability(&self) -> Option<&Clickable<'a, T>> {
        self.clickable.as_ref()
    }

    pub fn sort_capability(&self) -> Option<&Sortable<'a, T>> {
        self.sortable.as_ref()
    }

    /// Whether a header interaction on this column can change the sorting.
    pub fn is_sortable(&self) -> bool {
        self.sortable.as_ref().is_some_and(Sortable::is_enabled)
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn header_content(&self) -> &Header<'a> {
        &self.header
    }

    pub(crate) fn show_content(&self, ui: &mut Ui, item: &T) {
        (self.content)(ui, item);
    }
}

impl<T> fmt::Debug for Column<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("width", &self.width)
            .field("visible", &self.visible)
            .field("clickable", &self.clickable.as_ref().map(Clickable::is_enabled))
            .field("sortable", &self.sortable.as_ref().map(Sortable::is_enabled))
            .finish_non_exhaustive()
    }
}
