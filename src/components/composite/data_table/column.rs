//! Column Definition
//!
//! Defines table columns with their header, cell source and sortability.

use std::rc::Rc;

use gpui::{AnyElement, App, IntoElement, SharedString, Window};

use super::cell::CellValue;

/// Reads a comparable value from a row
pub type CellAccessor<R> = Rc<dyn Fn(&R) -> CellValue>;

/// Builds a cell element from a row
pub type CellRenderer<R> = Rc<dyn Fn(&R, &mut Window, &mut App) -> AnyElement>;

/// Builds a header element
pub type HeaderRenderer = Rc<dyn Fn(&mut Window, &mut App) -> AnyElement>;

/// Where a column's cell content comes from
pub enum ColumnKind<R> {
    /// Value read from the row; rendered as text unless `cell` is given
    Accessor {
        read: CellAccessor<R>,
        cell: Option<CellRenderer<R>>,
    },
    /// Content derived from the whole row (composite cells, action clusters)
    Display(CellRenderer<R>),
}

/// Column header content
#[derive(Clone)]
pub enum ColumnHeader {
    Label(SharedString),
    Render(HeaderRenderer),
}

/// Column width specification
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share of the remaining space
    Flex(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1.0)
    }
}

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier, also the sort key
    pub id: SharedString,
    pub header: ColumnHeader,
    pub width: ColumnWidth,
    /// Whether clicking the header sorts by this column
    pub sortable: bool,
    pub kind: ColumnKind<R>,
}

impl<R: 'static> Column<R> {
    /// Create a column that reads a value from each row
    pub fn accessor(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        read: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: ColumnHeader::Label(label.into()),
            width: ColumnWidth::default(),
            sortable: false,
            kind: ColumnKind::Accessor {
                read: Rc::new(read),
                cell: None,
            },
        }
    }

    /// Create a column whose content is derived from the whole row
    pub fn display(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        render: impl Fn(&R, &mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: ColumnHeader::Label(label.into()),
            width: ColumnWidth::default(),
            sortable: false,
            kind: ColumnKind::Display(Rc::new(render)),
        }
    }

    /// Replace the default text cell of an accessor column.
    ///
    /// Has no effect on display columns.
    pub fn cell(mut self, render: impl Fn(&R, &mut Window, &mut App) -> AnyElement + 'static) -> Self {
        if let ColumnKind::Accessor { cell, .. } = &mut self.kind {
            *cell = Some(Rc::new(render));
        }
        self
    }

    /// Render the header through a function instead of a label
    pub fn header(mut self, render: impl Fn(&mut Window, &mut App) -> AnyElement + 'static) -> Self {
        self.header = ColumnHeader::Render(Rc::new(render));
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width as a share of the remaining space
    pub fn flex_width(mut self, grow: f32) -> Self {
        self.width = ColumnWidth::Flex(grow);
        self
    }

    /// Make the column sortable; only accessor columns can sort
    pub fn sortable(mut self) -> Self {
        self.sortable = matches!(self.kind, ColumnKind::Accessor { .. });
        self
    }

    /// Whether header clicks should toggle sorting
    pub fn can_sort(&self) -> bool {
        self.sortable && self.accessor().is_some()
    }

    /// The value accessor, if this is an accessor column
    pub fn accessor(&self) -> Option<&CellAccessor<R>> {
        match &self.kind {
            ColumnKind::Accessor { read, .. } => Some(read),
            ColumnKind::Display(_) => None,
        }
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R, window: &mut Window, cx: &mut App) -> AnyElement {
        match &self.kind {
            ColumnKind::Accessor {
                cell: Some(render), ..
            } => render(row, window, cx),
            ColumnKind::Accessor { read, cell: None } => read(row).display().into_any_element(),
            ColumnKind::Display(render) => render(row, window, cx),
        }
    }

    /// Render the header content
    pub fn render_header(&self, window: &mut Window, cx: &mut App) -> AnyElement {
        match &self.header {
            ColumnHeader::Label(label) => label.clone().into_any_element(),
            ColumnHeader::Render(render) => render(window, cx),
        }
    }
}
