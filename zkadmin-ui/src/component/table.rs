//! Column-aligned rows built out of plain rows and fixed portions.
//!
//! Every row of a table shares the same column widths so that cells line up
//! without a dedicated grid widget.

use iced::{alignment::Vertical, Length};

use crate::{component::separation, widget::*};

pub struct Table<'a, T> {
    widths: Vec<Length>,
    header: Option<Row<'a, T>>,
    rows: Vec<Row<'a, T>>,
}

impl<'a, T: 'a> Table<'a, T> {
    /// `widths` gives the width of each column, cells beyond it are laid out with
    /// `Length::Shrink`.
    pub fn new(widths: Vec<Length>) -> Self {
        Self {
            widths,
            header: None,
            rows: Vec::new(),
        }
    }

    pub fn header(mut self, cells: Vec<Element<'a, T>>) -> Self {
        self.header = Some(self.row(cells));
        self
    }

    pub fn push(mut self, cells: Vec<Element<'a, T>>) -> Self {
        let row = self.row(cells);
        self.rows.push(row);
        self
    }

    fn row(&self, cells: Vec<Element<'a, T>>) -> Row<'a, T> {
        cells
            .into_iter()
            .enumerate()
            .fold(Row::new().spacing(10), |row, (i, cell)| {
                row.push(
                    Container::new(cell)
                        .width(self.widths.get(i).copied().unwrap_or(Length::Shrink)),
                )
            })
            .align_y(Vertical::Center)
            .padding([8, 0])
    }
}

impl<'a, T: 'a> From<Table<'a, T>> for Element<'a, T> {
    fn from(table: Table<'a, T>) -> Self {
        let mut col = Column::new();
        if let Some(header) = table.header {
            col = col.push(header).push(separation());
        }
        for row in table.rows {
            col = col.push(row).push(separation());
        }
        col.width(Length::Fill).into()
    }
}
