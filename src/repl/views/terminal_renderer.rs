//! # Terminal Renderer
//!
//! Draws the product screen onto a [`RenderStream`]:
//!
//! ```text
//!  Product Summary                                  (header bar)
//!
//!  Dashboard     │ Title   Category  Availability Status ...
//! ▸Products      │ ──────────────────────────────────────
//!  Pricing       │ Shoe    footwear  In Stock ...
//!                │ ...
//!                │
//!                │ ‹ Page 1 of 8 ›  5 / page  Total 37   (pager)
//!
//!  default @ https://dummyjson.com      j/k move ...  (status bar)
//! ```
//!
//! The edit modal is drawn centered on top of everything else.

use crate::repl::io::RenderStream;
use crate::repl::models::FormField;
use crate::repl::view_models::ProductListViewModel;
use crate::repl::views::ansi_escape_codes::*;
use crate::repl::views::columns::{column_widths, fit_to_width, Column, COLUMN_GAP};
use anyhow::Result;
use unicode_width::UnicodeWidthStr;

const SIDE_MENU_WIDTH: u16 = 15;
const SIDE_MENU_ITEMS: [&str; 3] = ["Dashboard", "Products", "Pricing"];
const ACTIVE_MENU_ITEM: &str = "Products";
const HEADER_TITLE: &str = "Product Summary";
const TABLE_KEY_HINTS: &str = "j/k row  Enter edit  h/l page  s size  r reload  q quit";
const MODAL_KEY_HINTS: &str = "Enter save  Esc cancel  Tab next field";
const MODAL_MAX_WIDTH: u16 = 64;

/// Underline the text of a padded cell, leaving the padding plain
fn underline_text(cell: &str) -> String {
    let text = cell.trim_end();
    format!("{UNDERLINE}{text}{RESET}{}", &cell[text.len()..])
}

/// Trait for rendering views
pub trait ViewRenderer {
    /// Prepare the terminal (raw mode, alternate screen)
    fn initialize(&mut self) -> Result<()>;

    /// Redraw the whole screen
    fn render_full(&mut self, view_model: &ProductListViewModel) -> Result<()>;

    /// Redraw the table rows
    fn render_table(&mut self, view_model: &ProductListViewModel) -> Result<()>;

    /// Redraw the pager line
    fn render_pager(&mut self, view_model: &ProductListViewModel) -> Result<()>;

    /// Redraw the status bar
    fn render_status_bar(&mut self, view_model: &ProductListViewModel) -> Result<()>;

    /// Redraw the edit modal, if one is open
    fn render_modal(&mut self, view_model: &ProductListViewModel) -> Result<()>;

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Screen rows and columns derived from the terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    width: u16,
    height: u16,
    content_x: u16,
    table_header_row: u16,
    first_data_row: u16,
    data_rows: u16,
    pager_row: u16,
    status_row: u16,
}

impl Layout {
    fn new((width, height): (u16, u16)) -> Self {
        let status_row = height.saturating_sub(1);
        let pager_row = height.saturating_sub(3);
        let first_data_row = 4;
        Self {
            width,
            height,
            content_x: SIDE_MENU_WIDTH + 2,
            table_header_row: 2,
            first_data_row,
            data_rows: pager_row.saturating_sub(first_data_row + 1),
            pager_row,
            status_row,
        }
    }

    fn content_width(&self) -> usize {
        self.width.saturating_sub(self.content_x) as usize
    }
}

/// Renders through any [`RenderStream`]
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer sized to the stream's terminal
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    fn layout(&self) -> Layout {
        Layout::new(self.terminal_size)
    }

    /// Write styled text at a position and blank the rest of the row
    fn write_line(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.render_stream.move_cursor(x, y)?;
        write!(self.render_stream, "{text}")?;
        self.render_stream.clear_line()?;
        Ok(())
    }

    fn render_header(&mut self) -> Result<()> {
        let width = self.terminal_size.0 as usize;
        let title = fit_to_width(&format!(" {HEADER_TITLE}"), width);
        self.render_stream.move_cursor(0, 0)?;
        write!(
            self.render_stream,
            "{BG_256_STEEL_BLUE}{FG_BRIGHT_WHITE}{BOLD}{title}{RESET}"
        )?;
        Ok(())
    }

    fn render_side_menu(&mut self) -> Result<()> {
        let layout = self.layout();
        for (i, item) in SIDE_MENU_ITEMS.iter().enumerate() {
            let row = layout.table_header_row + i as u16;
            if row >= layout.pager_row {
                break;
            }
            let label = fit_to_width(item, SIDE_MENU_WIDTH as usize - 1);
            self.render_stream.move_cursor(0, row)?;
            if *item == ACTIVE_MENU_ITEM {
                write!(self.render_stream, "{FG_CYAN}{BOLD}▸{label}{RESET}")?;
            } else {
                write!(self.render_stream, " {label}")?;
            }
        }

        for row in layout.table_header_row..=layout.pager_row {
            self.render_stream.move_cursor(SIDE_MENU_WIDTH, row)?;
            write!(self.render_stream, "{DIM}│{RESET}")?;
        }
        Ok(())
    }

    /// First record index shown, so the selected row stays visible
    fn scroll_offset(layout: &Layout, view_model: &ProductListViewModel) -> usize {
        let visible = layout.data_rows as usize;
        if visible == 0 {
            return 0;
        }
        (view_model.selected_row() + 1).saturating_sub(visible)
    }

    fn table_row_text(record_cells: &[String], widths: &[usize]) -> Vec<String> {
        record_cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| fit_to_width(cell, *width))
            .collect()
    }

    fn render_table_rows(&mut self, view_model: &ProductListViewModel) -> Result<()> {
        let layout = self.layout();
        let widths = column_widths(layout.content_width());

        let headers: Vec<String> = Column::ALL.iter().map(|c| c.header().to_string()).collect();
        let header_line = Self::table_row_text(&headers, &widths).join(COLUMN_GAP);
        self.write_line(
            layout.content_x,
            layout.table_header_row,
            &format!("{BOLD}{header_line}{RESET}"),
        )?;
        let rule = "─".repeat(layout.content_width());
        self.write_line(
            layout.content_x,
            layout.table_header_row + 1,
            &format!("{DIM}{rule}{RESET}"),
        )?;

        let records = view_model.records();
        let offset = Self::scroll_offset(&layout, view_model);

        for slot in 0..layout.data_rows {
            let row = layout.first_data_row + slot;
            let index = offset + slot as usize;

            let Some(record) = records.get(index) else {
                let filler = if records.is_empty() && slot == 0 && !view_model.is_loading() {
                    format!("{DIM}No data{RESET}")
                } else {
                    String::new()
                };
                self.write_line(layout.content_x, row, &filler)?;
                continue;
            };

            let cells: Vec<String> = Column::ALL.iter().map(|c| c.cell(record)).collect();
            let fitted = Self::table_row_text(&cells, &widths);

            let line = if index == view_model.selected_row() {
                format!("{REVERSE}{}{RESET}", fitted.join(COLUMN_GAP))
            } else {
                let availability_color = if record.is_in_stock() {
                    FG_GREEN
                } else {
                    FG_RED
                };
                fitted
                    .iter()
                    .zip(Column::ALL)
                    .map(|(cell, column)| match column {
                        Column::Availability => format!("{availability_color}{cell}{RESET}"),
                        Column::Title => underline_text(cell),
                        _ => cell.clone(),
                    })
                    .collect::<Vec<_>>()
                    .join(COLUMN_GAP)
            };
            self.write_line(layout.content_x, row, &line)?;
        }
        Ok(())
    }

    /// Pager text for the requested page
    pub fn pager_text(view_model: &ProductListViewModel) -> String {
        let requested = view_model.requested_page();
        format!(
            "‹ Page {} of {} ›  {} / page  Total {}",
            requested.page,
            view_model.page_state().last_page(),
            requested.size,
            view_model.total()
        )
    }

    fn render_pager_line(&mut self, view_model: &ProductListViewModel) -> Result<()> {
        let layout = self.layout();
        if layout.pager_row <= layout.first_data_row {
            return Ok(());
        }
        let text = Self::pager_text(view_model);
        self.write_line(layout.content_x, layout.pager_row, &text)
    }

    fn render_status_line(&mut self, view_model: &ProductListViewModel) -> Result<()> {
        let layout = self.layout();
        let width = layout.width as usize;
        let status = view_model.status_line();

        let left = format!(" {}", view_model.status_text());
        let hints = if view_model.is_modal_open() {
            MODAL_KEY_HINTS
        } else {
            TABLE_KEY_HINTS
        };

        let left_width = UnicodeWidthStr::width(left.as_str());
        let hints_width = UnicodeWidthStr::width(hints) + 1;
        let line = if left_width + hints_width + 2 <= width {
            let gap = width - left_width - hints_width;
            format!("{left}{}{hints} ", " ".repeat(gap))
        } else {
            fit_to_width(&left, width)
        };

        let color = if view_model.is_loading() {
            FG_YELLOW
        } else if status.status_message().is_some() {
            FG_RED
        } else {
            ""
        };

        self.render_stream.move_cursor(0, layout.status_row)?;
        write!(self.render_stream, "{REVERSE}{color}{line}{RESET}")?;
        Ok(())
    }

    fn render_modal_box(&mut self, view_model: &ProductListViewModel) -> Result<()> {
        let Some(form) = view_model.edit_form() else {
            return Ok(());
        };
        let layout = self.layout();

        let box_width = layout.width.saturating_sub(4).min(MODAL_MAX_WIDTH);
        if box_width < 20 {
            return Ok(());
        }
        let inner = box_width as usize - 2;
        // border, blank, 3 × (field + message), blank, hints, border
        let box_height: u16 = 11;
        let left = (layout.width - box_width) / 2;
        let top = layout.height.saturating_sub(box_height) / 2;

        let caption = fit_to_width(&format!(" {} ", form.caption()), inner.saturating_sub(2));
        let caption = caption.trim_end();
        let top_border = format!(
            "┌─{BOLD}{caption}{RESET}{}┐",
            "─".repeat(inner - 1 - UnicodeWidthStr::width(caption))
        );
        let blank = format!("│{}│", " ".repeat(inner));

        let mut lines = vec![top_border, blank.clone()];

        let label_width = 7;
        let value_width = inner.saturating_sub(label_width + 4);
        let mut cursor_position = None;
        for field in FormField::ALL {
            let value = form.value(field);
            let focused = form.focused() == field;
            let value_cell = fit_to_width(value, value_width);
            let label = fit_to_width(&format!("{}:", field.label()), label_width);
            let styled_value = if focused {
                format!("{UNDERLINE}{value_cell}{RESET}")
            } else {
                value_cell
            };
            lines.push(format!("│ {label} {styled_value}  │"));

            if focused {
                let row = top + lines.len() as u16 - 1;
                let column = left
                    + 2
                    + label_width as u16
                    + 1
                    + (UnicodeWidthStr::width(value).min(value_width.saturating_sub(1))) as u16;
                cursor_position = Some((column, row));
            }

            let message = form
                .errors()
                .for_field(field)
                .map(|e| e.to_string())
                .unwrap_or_default();
            let message = fit_to_width(&message, inner.saturating_sub(label_width + 2));
            lines.push(format!(
                "│ {} {FG_RED}{message}{RESET}│",
                " ".repeat(label_width)
            ));
        }

        lines.push(blank);
        let hints = fit_to_width(MODAL_KEY_HINTS, inner.saturating_sub(2));
        lines.push(format!("│ {DIM}{hints}{RESET} │"));
        lines.push(format!("└{}┘", "─".repeat(inner)));

        for (i, line) in lines.iter().enumerate() {
            self.render_stream.move_cursor(left, top + i as u16)?;
            write!(self.render_stream, "{line}")?;
        }

        if let Some((x, y)) = cursor_position {
            self.render_stream.move_cursor(x, y)?;
            self.render_stream.show_cursor()?;
        }
        Ok(())
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_full(&mut self, view_model: &ProductListViewModel) -> Result<()> {
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;
        self.render_header()?;
        self.render_side_menu()?;
        self.render_table_rows(view_model)?;
        self.render_pager_line(view_model)?;
        self.render_status_line(view_model)?;
        self.render_modal_box(view_model)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_table(&mut self, view_model: &ProductListViewModel) -> Result<()> {
        self.render_stream.hide_cursor()?;
        self.render_table_rows(view_model)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_pager(&mut self, view_model: &ProductListViewModel) -> Result<()> {
        self.render_pager_line(view_model)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_status_bar(&mut self, view_model: &ProductListViewModel) -> Result<()> {
        self.render_status_line(view_model)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_modal(&mut self, view_model: &ProductListViewModel) -> Result<()> {
        self.render_modal_box(view_model)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        self.render_stream.flush()?;
        Ok(())
    }
}
