//! Size-detail grid editor
//!
//! Rows are the rule's measurement items, columns the 18 size bins in
//! canonical order. A multi-cell clipboard block is intercepted before the
//! focused text field sees it and written across the grid from the focused
//! cell.

use knit_core::SizeRange;

use crate::app_state::{AppAction, AppState};
use crate::panels::widgets;
use crate::state::{SizeGridState, TemplatesRoute, apply_paste_block, is_block_paste};

/// Render the size grid. Returns the next route when the user leaves it.
pub fn ui(
    ui: &mut egui::Ui,
    state: &mut AppState,
    grid: &mut SizeGridState,
) -> Option<TemplatesRoute> {
    let template_id = grid.template_id;
    let Some(template_name) = state.store.template(template_id).map(|t| t.name.clone()) else {
        if widgets::not_found(ui, "템플릿") {
            return Some(TemplatesRoute::List);
        }
        return None;
    };

    let mut next = None;

    ui.horizontal(|ui| {
        ui.heading(format!("{template_name} — 세부 치수 입력"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("저장").clicked() {
                state.queue_action(AppAction::SaveSizeDetails {
                    template_id,
                    details: grid.to_size_details(),
                });
            }
            if ui.button("취소").clicked() {
                next = Some(TemplatesRoute::Detail(template_id));
            }
        });
    });
    ui.weak("min과 max는 사용자가 프로젝트 생성 시 세부 치수를 조정할 수 있는 범위입니다. 보통 1~5cm 내외로 설정합니다.");
    ui.separator();

    if grid.items.is_empty() {
        ui.weak("측정 규칙에 선택된 항목이 없습니다. 먼저 측정 규칙 설정에서 항목을 추가해 주세요.");
        return next;
    }

    handle_block_paste(ui, grid);

    let mut focused = None;
    egui::ScrollArea::both().show(ui, |ui| {
        egui::Grid::new("size_grid")
            .num_columns(SizeRange::ALL.len() + 1)
            .striped(true)
            .min_col_width(56.0)
            .show(ui, |ui| {
                ui.strong("측정 항목");
                for size in SizeRange::ALL {
                    if size.is_sentinel() {
                        ui.colored_label(ui.visuals().hyperlink_color, size.label());
                    } else {
                        ui.strong(size.label());
                    }
                }
                ui.end_row();

                for (row, item) in grid.items.clone().iter().enumerate() {
                    ui.label(item.label());
                    for col in 0..SizeRange::ALL.len() {
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut grid.cells[row][col])
                                .desired_width(52.0)
                                .horizontal_align(egui::Align::Center),
                        );
                        if response.has_focus() {
                            focused = Some((row, col));
                        }
                    }
                    ui.end_row();
                }
            });
    });

    if focused.is_some() {
        grid.focused = focused;
    }

    next
}

/// Intercept spreadsheet-style paste events and write the block into the grid
/// anchored at the focused cell. Single-value pastes are left for the focused
/// text field to handle normally.
fn handle_block_paste(ui: &egui::Ui, grid: &mut SizeGridState) {
    let Some(anchor) = grid.focused else {
        return;
    };

    let mut block = None;
    ui.ctx().input_mut(|input| {
        for event in &input.events {
            if let egui::Event::Paste(text) = event
                && is_block_paste(text)
            {
                block = Some(text.clone());
            }
        }
        if block.is_some() {
            input
                .events
                .retain(|e| !matches!(e, egui::Event::Paste(_)));
        }
    });

    if let Some(text) = block {
        let written = apply_paste_block(&mut grid.cells, anchor, &text);
        tracing::debug!(written, "applied clipboard block to size grid");
    }
}
