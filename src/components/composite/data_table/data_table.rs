//! DataTable Component
//!
//! A sortable, paginated table over caller-supplied rows.
//!
//! The table owns its `TableState` (page, page size, sort) and a cached
//! `DerivedView`. Callers push rows and columns in; the table never mutates
//! the rows it is given.

use std::rc::Rc;

use gpui::{
    Action, App, ClickEvent, Context, Entity, EventEmitter, FocusHandle, Focusable, IntoElement,
    ParentElement, Render, SharedString, Styled, Subscription, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable, h_flex,
    input::{InputEvent, InputState},
    label::Label,
    v_flex,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use super::column::{Column, ColumnWidth};
use super::options::TableOptions;
use super::pagination::{NavigateHandler, Pagination};
use super::state::{PageNav, SortDirection, SortSpec, TableState};
use super::view::{DerivedView, OrderKey, RowFilter};
use crate::components::composite::empty::Empty;
use crate::constants::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::states::i18n_table;

/// Key context for table bindings
pub const TABLE_KEY_CONTEXT: &str = "DataTable";

/// Keyboard actions handled inside a table
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum TableAction {
    /// Focus the row above
    SelectPrev,
    /// Focus the row below
    SelectNext,
    /// Run the row-click handler on the focused row
    Activate,
}

/// Rows-per-page choice from the pagination menu
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub struct SetPageSize {
    pub size: usize,
}

/// Events emitted to the table's owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableEvent {
    /// The user picked a new page size
    PageSizeChanged(usize),
}

/// What the table body shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Empty,
    Rows,
}

/// Loading wins over empty, empty wins over rows
pub fn table_body(loading: bool, total: usize) -> TableBody {
    if loading {
        TableBody::Loading
    } else if total == 0 {
        TableBody::Empty
    } else {
        TableBody::Rows
    }
}

/// Whether `sort` still points at a sortable column
fn sort_survives<R: 'static>(sort: Option<&SortSpec>, columns: &[Column<R>]) -> bool {
    sort.is_none_or(|spec| columns.iter().any(|c| c.id == spec.column && c.can_sort()))
}

/// Called when a row is clicked or activated with the keyboard
pub type RowClickHandler<R> = Rc<dyn Fn(&R, &mut Window, &mut App)>;

/// DataTable component
pub struct DataTable<R: 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    filter: Option<RowFilter<R>>,
    options: TableOptions,
    state: TableState,
    view: DerivedView,
    data_generation: u64,
    filter_generation: u64,
    empty_message: Option<SharedString>,
    on_row_click: Option<RowClickHandler<R>>,
    focus_handle: FocusHandle,
    /// One handle per row of the current page
    row_focus: Vec<FocusHandle>,
    page_input: Entity<InputState>,
    /// Page index last written into `page_input`
    synced_page: Option<usize>,
    _subscriptions: Vec<Subscription>,
}

impl<R: 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(options: TableOptions, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let page_input = cx.new(|cx| InputState::new(window, cx));

        let subscriptions = vec![cx.subscribe(&page_input, |this, input, event: &InputEvent, cx| {
            if matches!(event, InputEvent::PressEnter { .. } | InputEvent::Blur) {
                let value = input.read(cx).value().to_string();
                this.go_to_page(&value, cx);
            }
        })];

        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            filter: None,
            options,
            state: TableState::new(options.page_size),
            view: DerivedView::new(),
            data_generation: 0,
            filter_generation: 0,
            empty_message: None,
            on_row_click: None,
            focus_handle: cx.focus_handle(),
            row_focus: Vec::new(),
            page_input,
            synced_page: None,
            _subscriptions: subscriptions,
        }
    }

    // ==================== Setters ====================

    /// Replace the rows; the page index is clamped on the next render
    pub fn set_rows(&mut self, rows: Vec<R>, cx: &mut Context<Self>) {
        self.rows = rows;
        self.data_generation += 1;
        cx.notify();
    }

    /// Replace the rows with a newly filtered set and return to the first page
    pub fn set_filtered_rows(&mut self, rows: Vec<R>, cx: &mut Context<Self>) {
        self.state.filter_changed();
        self.set_rows(rows, cx);
    }

    /// Replace the columns, dropping a sort on a column that no longer sorts
    pub fn set_columns(&mut self, columns: Vec<Column<R>>, cx: &mut Context<Self>) {
        self.columns = columns;
        if !sort_survives(self.state.sort(), &self.columns) {
            self.state.clear_sort();
        }
        self.view.invalidate();
        cx.notify();
    }

    /// Set or clear the in-table row predicate
    pub fn set_filter(&mut self, filter: Option<RowFilter<R>>, cx: &mut Context<Self>) {
        self.filter = filter;
        self.filter_generation += 1;
        self.state.filter_changed();
        cx.notify();
    }

    pub fn set_loading(&mut self, loading: bool, cx: &mut Context<Self>) {
        if self.options.loading != loading {
            self.options.loading = loading;
            cx.notify();
        }
    }

    /// Message for the empty state; `None` restores the default
    pub fn set_empty_message(&mut self, message: Option<SharedString>, cx: &mut Context<Self>) {
        if self.empty_message != message {
            self.empty_message = message;
            cx.notify();
        }
    }

    pub fn on_row_click(&mut self, handler: impl Fn(&R, &mut Window, &mut App) + 'static) {
        self.on_row_click = Some(Rc::new(handler));
    }

    // ==================== Handlers ====================

    fn toggle_sort(&mut self, column_ix: usize, cx: &mut Context<Self>) {
        let Some(column) = self.columns.get(column_ix) else {
            return;
        };
        if !column.can_sort() {
            return;
        }
        let id = column.id.clone();
        let direction = self.state.toggle_sort(id.clone()).map(|spec| spec.direction);
        debug!(column = %id, direction = ?direction, "Table sort changed");
        cx.notify();
    }

    fn navigate(&mut self, nav: PageNav, cx: &mut Context<Self>) {
        self.state.navigate(nav, self.view.filtered_len());
        debug!(nav = ?nav, page = self.state.page_index(), "Table page changed");
        cx.notify();
    }

    fn set_page_size(&mut self, action: &SetPageSize, _window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.set_page_size(action.size) {
            return;
        }
        debug!(size = action.size, "Table page size changed");
        cx.emit(TableEvent::PageSizeChanged(action.size));
        cx.notify();
    }

    fn go_to_page(&mut self, input: &str, cx: &mut Context<Self>) {
        self.state.go_to_page_input(input, self.view.filtered_len());
        // Rewrite the input even when the page did not change (e.g. "abc")
        self.synced_page = None;
        debug!(input, page = self.state.page_index(), "Table page entered");
        cx.notify();
    }

    fn handle_action(&mut self, action: &TableAction, window: &mut Window, cx: &mut Context<Self>) {
        let focused = self.row_focus.iter().position(|handle| handle.is_focused(window));
        let last = self.row_focus.len().saturating_sub(1);

        match action {
            TableAction::SelectPrev => {
                self.focus_row(focused.map_or(0, |ix| ix.saturating_sub(1)), window);
            }
            TableAction::SelectNext => {
                self.focus_row(focused.map_or(0, |ix| (ix + 1).min(last)), window);
            }
            TableAction::Activate => {
                if let Some(ix) = focused {
                    self.activate_row(ix, window, cx);
                }
            }
        }
    }

    fn focus_row(&self, position: usize, window: &mut Window) {
        if let Some(handle) = self.row_focus.get(position) {
            handle.focus(window);
        }
    }

    /// Run the row-click handler for a position on the current page
    fn activate_row(&self, position: usize, window: &mut Window, cx: &mut Context<Self>) {
        let Some(handler) = self.on_row_click.clone() else {
            return;
        };
        let row = self.view.page().get(position).and_then(|&ix| self.rows.get(ix));
        if let Some(row) = row {
            handler(row, window, cx);
        }
    }

    // ==================== Rendering ====================

    /// Resolve the derived view and return the row indices of the current page
    fn resolve_page(&mut self) -> Vec<usize> {
        let key = OrderKey {
            data_generation: self.data_generation,
            filter_generation: self.filter_generation,
            sort: self.state.sort().cloned(),
        };
        let sort_value = self.state.sort().and_then(|spec| {
            self.columns
                .iter()
                .find(|c| c.id == spec.column && c.can_sort())
                .and_then(|c| c.accessor().cloned())
        });

        self.view
            .resolve(key, &self.rows, self.filter.as_ref(), sort_value.as_deref(), &mut self.state)
            .to_vec()
    }

    fn sync_page_input(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let page = self.state.page_index();
        if self.synced_page == Some(page) {
            return;
        }
        self.page_input.update(cx, |input, cx| {
            input.set_value((page + 1).to_string(), window, cx);
        });
        self.synced_page = Some(page);
    }

    fn render_header(&self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let header_bg = cx.theme().table_head;
        let header_fg = cx.theme().table_head_foreground;
        let border = cx.theme().table_row_border;
        let muted = cx.theme().muted_foreground;

        let mut cells = Vec::with_capacity(self.columns.len());
        for (ix, column) in self.columns.iter().enumerate() {
            let sortable = column.can_sort();
            let indicator = match self.state.sort_direction(&column.id) {
                Some(SortDirection::Ascending) => Some(Icon::new(IconName::ArrowUp).small()),
                Some(SortDirection::Descending) => Some(Icon::new(IconName::ArrowDown).small()),
                None if sortable => Some(Icon::new(IconName::ChevronsUpDown).small().text_color(muted)),
                None => None,
            };

            let cell = apply_width(
                h_flex()
                    .id(("table-header", ix))
                    .h_full()
                    .px_3()
                    .gap_1()
                    .items_center()
                    .text_sm()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(column.render_header(window, cx))
                    .children(indicator),
                column.width,
            )
            .when(sortable, |el| {
                el.cursor_pointer()
                    .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| this.toggle_sort(ix, cx)))
            });
            cells.push(cell);
        }

        h_flex()
            .w_full()
            .h(px(TABLE_HEADER_HEIGHT))
            .bg(header_bg)
            .text_color(header_fg)
            .border_b_1()
            .border_color(border)
            .children(cells)
    }

    fn render_rows(&self, page: &[usize], window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let even_bg = cx.theme().table_even;
        let hover_bg = cx.theme().table_hover;
        let active_bg = cx.theme().table_active;
        let border = cx.theme().table_row_border;

        let mut rows = Vec::with_capacity(page.len());
        for (position, &row_ix) in page.iter().enumerate() {
            let (Some(row), Some(handle)) = (self.rows.get(row_ix), self.row_focus.get(position)) else {
                continue;
            };

            let mut cells = Vec::with_capacity(self.columns.len());
            for column in &self.columns {
                cells.push(apply_width(
                    div()
                        .px_3()
                        .overflow_hidden()
                        .text_sm()
                        .child(column.render_cell(row, window, cx)),
                    column.width,
                ));
            }

            rows.push(
                h_flex()
                    .id(("table-row", position))
                    .track_focus(handle)
                    .w_full()
                    .h(px(TABLE_ROW_HEIGHT))
                    .items_center()
                    .border_b_1()
                    .border_color(border)
                    .when(position % 2 == 1, |el| el.bg(even_bg))
                    .hover(|style| style.bg(hover_bg))
                    .focus(|style| style.bg(active_bg))
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.focus_row(position, window);
                        this.activate_row(position, window, cx);
                    }))
                    .children(cells),
            );
        }

        v_flex().w_full().children(rows)
    }

    fn render_loading(&self, cx: &App) -> impl IntoElement {
        h_flex()
            .w_full()
            .py_8()
            .gap_2()
            .justify_center()
            .items_center()
            .text_color(cx.theme().muted_foreground)
            .child(Icon::new(IconName::Loader))
            .child(Label::new(i18n_table(cx, "loading")).text_sm())
    }

    fn render_pagination(&self, visible: usize, total: usize, cx: &mut Context<Self>) -> Pagination {
        let navigate = cx.listener(|this, nav: &PageNav, _, cx| this.navigate(*nav, cx));
        let on_navigate: NavigateHandler = Rc::new(navigate);

        Pagination::new(&self.state, visible, total, self.options)
            .page_input(self.page_input.clone())
            .menu_target(self.focus_handle.clone())
            .on_navigate(on_navigate)
    }
}

/// Apply a column width to a cell
fn apply_width<E: Styled>(element: E, width: ColumnWidth) -> E {
    match width {
        ColumnWidth::Fixed(w) => element.w(px(w)).flex_none(),
        ColumnWidth::Flex(grow) => {
            let mut element = element.flex_1().min_w_0();
            element.style().flex_grow = Some(grow);
            element
        }
    }
}

impl<R: 'static> EventEmitter<TableEvent> for DataTable<R> {}

impl<R: 'static> Focusable for DataTable<R> {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl<R: 'static> Render for DataTable<R> {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let page = self.resolve_page();
        let total = self.view.filtered_len();
        self.row_focus.resize_with(page.len(), || cx.focus_handle());
        if self.options.show_page_selector {
            self.sync_page_input(window, cx);
        }

        let body = table_body(self.options.loading, total);
        let content = match body {
            TableBody::Loading => self.render_loading(cx).into_any_element(),
            TableBody::Empty => {
                let empty = match &self.empty_message {
                    Some(message) => Empty::new().message(message.clone()),
                    None => Empty::new(),
                };
                empty.into_any_element()
            }
            TableBody::Rows => v_flex()
                .w_full()
                .border_1()
                .border_color(cx.theme().border)
                .rounded_md()
                .overflow_hidden()
                .child(self.render_header(window, cx))
                .child(self.render_rows(&page, window, cx))
                .into_any_element(),
        };

        let show_footer = body == TableBody::Rows && self.options.has_footer();
        let footer = show_footer.then(|| self.render_pagination(page.len(), total, cx));

        v_flex()
            .id("data-table")
            .key_context(TABLE_KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::handle_action))
            .on_action(cx.listener(Self::set_page_size))
            .w_full()
            .child(content)
            .children(footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::CellValue;

    struct Row {
        name: &'static str,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::accessor("name", "Name", |r: &Row| CellValue::from(r.name)).sortable(),
            Column::accessor("note", "Note", |r: &Row| CellValue::from(r.name)),
            Column::display("actions", "Actions", |_, _, _| gpui::div().into_any_element()),
        ]
    }

    fn sorted_by(column: &str) -> TableState {
        let mut state = TableState::new(10);
        state.toggle_sort(SharedString::from(column.to_string()));
        state
    }

    #[test]
    fn loading_wins_over_empty_and_rows() {
        assert_eq!(table_body(true, 0), TableBody::Loading);
        assert_eq!(table_body(true, 12), TableBody::Loading);
        assert_eq!(table_body(false, 0), TableBody::Empty);
        assert_eq!(table_body(false, 12), TableBody::Rows);
    }

    #[test]
    fn sort_on_sortable_column_survives_new_columns() {
        let state = sorted_by("name");
        assert!(sort_survives(state.sort(), &columns()));
        assert!(sort_survives(None, &columns()));
    }

    #[test]
    fn sort_is_dropped_when_column_stops_sorting_or_disappears() {
        assert!(!sort_survives(sorted_by("note").sort(), &columns()));
        assert!(!sort_survives(sorted_by("actions").sort(), &columns()));
        assert!(!sort_survives(sorted_by("email").sort(), &columns()));

        let without_name: Vec<Column<Row>> = columns().into_iter().skip(1).collect();
        assert!(!sort_survives(sorted_by("name").sort(), &without_name));
    }
}
