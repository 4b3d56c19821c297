use chrono::NaiveDate;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::models::displayed_month::DisplayedMonth;
use crate::models::layout::{CellContent, CellRect, LineSegment, PlacedCell};
use crate::services::calendar_grid::{self, GridError, DAYS_IN_WEEK};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::is_weekend;

const TITLE_FONT_SIZE: f32 = 20.0;
const LABEL_FONT_SIZE: f32 = 14.0;
const DAY_FONT_SIZE: f32 = 16.0;

/// Cells and separators for one frame, relative to the view's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthFrame {
    pub cells: Vec<PlacedCell>,
    pub lines: Vec<LineSegment>,
}

impl MonthFrame {
    /// Fit the month grid into `size`, leaving `header_height` on top for
    /// the title. Columns share the width; the weekday row and every day
    /// row share the remaining height.
    pub fn compute(
        month: &DisplayedMonth,
        size: Vec2,
        header_height: f32,
    ) -> Result<Self, GridError> {
        let day_rows = calendar_grid::month_row_count(month.year(), month.month())?;
        let grid_rows = day_rows + 1;
        let cell_width = size.x / DAYS_IN_WEEK as f32;
        let cell_height = (size.y - header_height) / grid_rows as f32;

        let cells = calendar_grid::layout_month(
            month.year(),
            month.month(),
            cell_width,
            cell_height,
            header_height,
        )?
        .collect();
        let lines = calendar_grid::grid_lines(
            grid_rows,
            DAYS_IN_WEEK,
            cell_width,
            cell_height,
            header_height,
        )?;

        Ok(Self { cells, lines })
    }
}

pub struct MonthView;

impl MonthView {
    pub fn show(
        ui: &mut egui::Ui,
        month: &DisplayedMonth,
        today: NaiveDate,
        header_height: f32,
        theme: &CalendarTheme,
    ) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let frame = match MonthFrame::compute(month, rect.size(), header_height) {
            Ok(frame) => frame,
            Err(e) => {
                log::debug!("Skipping month grid for {:?}: {}", rect.size(), e);
                return;
            }
        };

        let painter = ui.painter_at(rect);
        let origin = rect.min;

        if header_height > 0.0 {
            painter.text(
                Pos2::new(rect.center().x, rect.top() + header_height / 2.0),
                Align2::CENTER_CENTER,
                month.title(),
                FontId::proportional(TITLE_FONT_SIZE),
                theme.text_primary,
            );
        }

        let today_day = Self::today_in_month(month, today);
        for cell in &frame.cells {
            let screen_rect = to_screen(origin, &cell.rect);
            let is_today = today_day.is_some() && cell.content.day() == today_day;
            painter.rect_filled(screen_rect, 0.0, Self::cell_fill(cell, is_today, theme));

            let (font_size, color) = match cell.content {
                CellContent::WeekdayLabel(_) => (LABEL_FONT_SIZE, theme.text_secondary),
                CellContent::Day(_) => (DAY_FONT_SIZE, theme.text_primary),
            };
            painter.text(
                screen_rect.center(),
                Align2::CENTER_CENTER,
                cell.content.text(),
                FontId::proportional(font_size),
                color,
            );

            if is_today {
                painter.rect_stroke(
                    screen_rect.shrink(1.0),
                    2.0,
                    Stroke::new(2.0, theme.today_border),
                );
            }
        }

        let stroke = Stroke::new(1.0, theme.day_border);
        for line in &frame.lines {
            painter.line_segment(
                [
                    origin + Vec2::new(line.x1, line.y1),
                    origin + Vec2::new(line.x2, line.y2),
                ],
                stroke,
            );
        }
    }

    fn today_in_month(month: &DisplayedMonth, today: NaiveDate) -> Option<u32> {
        use chrono::Datelike;

        (today.year() == month.year() && today.month() == month.month()).then(|| today.day())
    }

    fn cell_fill(cell: &PlacedCell, is_today: bool, theme: &CalendarTheme) -> Color32 {
        if cell.is_weekday_label() {
            theme.header_background
        } else if is_today {
            theme.today_background
        } else if is_weekend(cell.col) {
            theme.weekend_background
        } else {
            theme.day_background
        }
    }
}

fn to_screen(origin: Pos2, rect: &CellRect) -> Rect {
    Rect::from_min_max(
        origin + Vec2::new(rect.left, rect.top),
        origin + Vec2::new(rect.right, rect.bottom),
    )
}
