//! Size-detail grid state
//!
//! The per-size measurement table of a template: rows are the rule's items in
//! declaration order, columns the 18 size bins in canonical order. Cells are
//! edited as text and coerced to numbers on submit; a clipboard block can be
//! pasted anchored at the focused cell.

use std::collections::HashMap;

use uuid::Uuid;

use knit_core::{MeasurementItemId, MeasurementRule, SizeDetail, SizeRange, Template};

/// Editing state of the size-detail table
#[derive(Debug, Clone)]
pub struct SizeGridState {
    pub template_id: Uuid,
    /// Row order, from the rule's item declaration order
    pub items: Vec<MeasurementItemId>,
    /// `cells[row][col]` as typed, indexed by item row and `SizeRange::ALL` column
    pub cells: Vec<Vec<String>>,
    /// Cell that currently has keyboard focus, paste anchor
    pub focused: Option<(usize, usize)>,
}

impl SizeGridState {
    /// Project a template's size details into the editable grid
    pub fn new(template: &Template, rule: &MeasurementRule) -> Self {
        let items = rule.items.clone();
        let mut cells = vec![vec![String::new(); SizeRange::ALL.len()]; items.len()];

        for (col, size) in SizeRange::ALL.iter().enumerate() {
            let Some(detail) = template.size_details.iter().find(|d| d.size_range == *size) else {
                continue;
            };
            for (row, item) in items.iter().enumerate() {
                if let Some(value) = detail.measurements.get(item) {
                    cells[row][col] = format_cell(*value);
                }
            }
        }

        Self {
            template_id: template.id,
            items,
            cells,
            focused: None,
        }
    }

    /// Flatten the grid back into size-detail rows; empty and unparseable
    /// cells become 0.
    pub fn to_size_details(&self) -> Vec<SizeDetail> {
        SizeRange::ALL
            .iter()
            .enumerate()
            .map(|(col, &size_range)| {
                let mut measurements = HashMap::new();
                for (row, &item) in self.items.iter().enumerate() {
                    let value = self.cells[row][col].trim().parse::<f32>().unwrap_or(0.0);
                    measurements.insert(item, value);
                }
                SizeDetail {
                    size_range,
                    measurements,
                }
            })
            .collect()
    }
}

/// Render a stored value the way it was most likely typed
fn format_cell(value: f32) -> String {
    if value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Write a tab/newline-delimited clipboard block into the grid.
///
/// Rows split on newlines, columns on tabs, anchored at `anchor`; values
/// falling outside the grid are dropped silently. Returns the number of cells
/// written.
pub fn apply_paste_block(
    cells: &mut [Vec<String>],
    anchor: (usize, usize),
    text: &str,
) -> usize {
    let (anchor_row, anchor_col) = anchor;
    let mut written = 0;

    for (row_offset, line) in text.lines().enumerate() {
        let row = anchor_row + row_offset;
        let Some(row_cells) = cells.get_mut(row) else {
            continue;
        };
        for (col_offset, value) in line.split('\t').enumerate() {
            let col = anchor_col + col_offset;
            if let Some(cell) = row_cells.get_mut(col) {
                *cell = value.trim().to_string();
                written += 1;
            }
        }
    }

    written
}

/// Whether clipboard text looks like a spreadsheet block rather than a value
pub fn is_block_paste(text: &str) -> bool {
    text.contains('\t') || text.trim_end_matches('\n').contains('\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use knit_core::SleeveType;

    fn grid(rows: usize, cols: usize) -> Vec<Vec<String>> {
        vec![vec![String::new(); cols]; rows]
    }

    #[test]
    fn test_paste_block_writes_exactly_its_cells() {
        let mut cells = grid(3, 4);
        let written = apply_paste_block(&mut cells, (0, 1), "1\t2\n3\t4");

        assert_eq!(written, 4);
        assert_eq!(cells[0][1], "1");
        assert_eq!(cells[0][2], "2");
        assert_eq!(cells[1][1], "3");
        assert_eq!(cells[1][2], "4");

        // Every other cell is untouched.
        let untouched = cells
            .iter()
            .flatten()
            .filter(|c| c.is_empty())
            .count();
        assert_eq!(untouched, 12 - 4);
    }

    #[test]
    fn test_paste_block_clips_to_bounds() {
        let mut cells = grid(2, 2);
        let written = apply_paste_block(&mut cells, (1, 1), "9\t8\t7\n6\t5\n4");

        // Only the anchor cell is in bounds.
        assert_eq!(written, 1);
        assert_eq!(cells[1][1], "9");
        assert_eq!(cells[0][0], "");
        assert_eq!(cells[0][1], "");
        assert_eq!(cells[1][0], "");
    }

    #[test]
    fn test_paste_block_trims_values() {
        let mut cells = grid(1, 2);
        apply_paste_block(&mut cells, (0, 0), " 1.5 \t 2.0 ");
        assert_eq!(cells[0][0], "1.5");
        assert_eq!(cells[0][1], "2.0");
    }

    #[test]
    fn test_is_block_paste() {
        assert!(is_block_paste("1\t2"));
        assert!(is_block_paste("1\n2"));
        assert!(!is_block_paste("12.5"));
        assert!(!is_block_paste("12.5\n"));
    }

    fn sample_rule() -> MeasurementRule {
        MeasurementRule::new(
            103,
            Some(SleeveType::Raglan),
            vec![MeasurementItemId::ChestWidth, MeasurementItemId::SleeveLength],
        )
    }

    #[test]
    fn test_grid_round_trip() {
        let rule = sample_rule();
        let mut template = Template::new("베이직 스웨터");
        template.measurement_rule_id = Some(rule.id);

        let mut grid = SizeGridState::new(&template, &rule);
        assert_eq!(grid.cells.len(), 2);
        assert_eq!(grid.cells[0].len(), 18);
        assert!(grid.cells.iter().flatten().all(|c| c.is_empty()));

        grid.cells[0][6] = "45".into(); // ChestWidth @ 74-79
        grid.cells[1][6] = "60.5".into(); // SleeveLength @ 74-79

        let details = grid.to_size_details();
        assert_eq!(details.len(), 18);
        let base = details
            .iter()
            .find(|d| d.size_range == SizeRange::S74_79)
            .unwrap();
        assert_eq!(base.measurements[&MeasurementItemId::ChestWidth], 45.0);
        assert_eq!(base.measurements[&MeasurementItemId::SleeveLength], 60.5);

        // Empty cells coerce to zero.
        let smallest = details
            .iter()
            .find(|d| d.size_range == SizeRange::S50_53)
            .unwrap();
        assert_eq!(smallest.measurements[&MeasurementItemId::ChestWidth], 0.0);
    }

    #[test]
    fn test_grid_loads_existing_details() {
        let rule = sample_rule();
        let mut template = Template::new("베이직 스웨터");
        template.measurement_rule_id = Some(rule.id);

        let mut detail = SizeDetail::empty(SizeRange::S74_79);
        detail.measurements.insert(MeasurementItemId::ChestWidth, 45.0);
        detail
            .measurements
            .insert(MeasurementItemId::SleeveLength, 60.5);
        template.size_details.push(detail);

        let grid = SizeGridState::new(&template, &rule);
        assert_eq!(grid.cells[0][6], "45");
        assert_eq!(grid.cells[1][6], "60.5");
    }
}
