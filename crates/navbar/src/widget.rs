//! egui rendering of a [`NavbarView`]. Clicks and keys come back as
//! [`NavbarEvent`]s; nothing here touches the page.

use crate::events::{LocationKey, NavbarEvent};
use crate::find::FindBar;
use crate::location::{LocationField, PrettyLocation, ProtocolClass};
use crate::page::DatView;
use crate::view::{DatButtons, DropdownRow, NavbarView, ReloadButton, RowIcon, RowText};
use crate::zoom::ZoomAction;
use core_types::BrowserInput;
use egui::text::{CCursor, CCursorRange};
use egui::text_edit::TextEditState;
use egui::{
    Align, Area, Button, Color32, Context, CornerRadius, Frame, Id, Key, Layout, Margin, Order, Rect,
    RichText, Sense, Stroke, TextEdit, Ui,
};

const BAR_HEIGHT: f32 = 28.0;
const FIELD_HEIGHT: f32 = BAR_HEIGHT - 8.0;
const SECURE_COLOR: Color32 = Color32::from_rgb(0x2e, 0x9e, 0x4f);
const PEER_TO_PEER_COLOR: Color32 = Color32::from_rgb(0x8a, 0x5c, 0xd6);

/// Snapshot of the keys the navbar reacts to this frame.
pub fn read_browser_input(ctx: &Context) -> BrowserInput {
    ctx.input(|i| BrowserInput {
        enter_pressed: i.key_pressed(Key::Enter),
        escape_pressed: i.key_pressed(Key::Escape),
        up_pressed: i.key_pressed(Key::ArrowUp),
        down_pressed: i.key_pressed(Key::ArrowDown),
        prev_pressed: i.modifiers.ctrl && i.key_pressed(Key::P),
        next_pressed: i.modifiers.ctrl && i.key_pressed(Key::N),
        shift_held: i.modifiers.shift,
        command_held: i.modifiers.command,
    })
}

pub fn navbar_ui(
    ui: &mut Ui,
    view: &NavbarView,
    location: &mut LocationField,
    find: &mut FindBar,
    input: BrowserInput,
) -> Vec<NavbarEvent> {
    let mut events = Vec::new();
    if view.hidden {
        return events;
    }
    let h = BAR_HEIGHT;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(view.back_enabled, Button::new("⬅").min_size([h, h].into()))
            .clicked()
        {
            events.push(NavbarEvent::Back);
        }
        if ui
            .add_enabled(view.forward_enabled, Button::new("➡").min_size([h, h].into()))
            .clicked()
        {
            events.push(NavbarEvent::Forward);
        }
        let (label, event) = match view.reload {
            ReloadButton::Reload => ("🔄", NavbarEvent::Reload),
            ReloadButton::Cancel => ("✖", NavbarEvent::Cancel),
        };
        if ui.add(Button::new(label).min_size([h, h].into())).clicked() {
            events.push(event);
        }

        ui.add_space(6.0);

        // right-hand controls are laid out first so the location field can take the rest
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            page_actions(ui, view, input, &mut events);
            if let Some(value) = &view.find {
                find_input(ui, value, find, input, &mut events);
            }
            location_input(ui, view, location, input, &mut events);
        });
    });

    // blur after the dropdown had its chance to report a click
    if location.blur_deferred && !ui.input(|i| i.pointer.any_down()) {
        location.blur_deferred = false;
        events.push(NavbarEvent::BlurLocation);
    }

    events
}

fn page_actions(ui: &mut Ui, view: &NavbarView, input: BrowserInput, events: &mut Vec<NavbarEvent>) {
    let star = if view.bookmarked { "★" } else { "☆" };
    if ui.button(star).clicked() {
        events.push(NavbarEvent::ToggleBookmark);
    }

    if let Some(percent) = view.zoom_percent {
        ui.menu_button(format!("{percent}%"), |ui| {
            for action in ZoomAction::ALL {
                if ui.button(action.label()).clicked() {
                    events.push(NavbarEvent::Zoom(action));
                    ui.close();
                }
            }
        });
    }

    match view.dat {
        DatButtons::None => {}
        DatButtons::Alternative => {
            if ui.button("dat").on_hover_text("Go to the dat version").clicked() {
                events.push(NavbarEvent::GotoDatVersion {
                    new_page: input.command_held,
                });
            }
        }
        DatButtons::Viewing {
            live_reloading,
            saved,
        } => {
            if ui.selectable_label(saved, "💾").on_hover_text("Save site").clicked() {
                events.push(NavbarEvent::ToggleSaveSite);
            }
            if ui.button("Files").clicked() {
                events.push(NavbarEvent::OpenDatView {
                    view: DatView::Files,
                    new_page: input.command_held,
                });
            }
            if ui.button("Fork").clicked() {
                events.push(NavbarEvent::OpenDatView {
                    view: DatView::Fork,
                    new_page: input.command_held,
                });
            }
            if ui
                .selectable_label(live_reloading, "⚡")
                .on_hover_text("Live reload")
                .clicked()
            {
                events.push(NavbarEvent::ToggleLiveReload);
            }
        }
    }
}

fn find_input(
    ui: &mut Ui,
    value: &str,
    find: &mut FindBar,
    input: BrowserInput,
    events: &mut Vec<NavbarEvent>,
) {
    let mut text = value.to_string();
    let resp = ui.add_sized(
        [160.0, FIELD_HEIGHT],
        TextEdit::singleline(&mut text)
            .return_key(None)
            .hint_text("Find in page")
            .vertical_align(Align::Center),
    );
    if find.focus_requested {
        find.focus_requested = false;
        resp.request_focus();
    }
    if resp.changed() {
        events.push(NavbarEvent::FindInput(text));
    }
    if input.enter_pressed && resp.has_focus() {
        events.push(NavbarEvent::FindEnter {
            backwards: input.shift_held,
        });
    }
    if input.escape_pressed && (resp.has_focus() || resp.lost_focus()) {
        events.push(NavbarEvent::FindEscape);
    }
}

fn location_input(
    ui: &mut Ui,
    view: &NavbarView,
    location: &mut LocationField,
    input: BrowserInput,
    events: &mut Vec<NavbarEvent>,
) {
    let frame = Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .stroke(Stroke::new(
            1.0,
            ui.visuals().widgets.inactive.bg_stroke.color,
        ))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(6, 2));

    if !location.focused {
        let resp = frame
            .show(ui, |ui| {
                ui.set_min_size([ui.available_width(), FIELD_HEIGHT].into());
                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                    pretty_location_ui(ui, &view.pretty_location);
                });
            })
            .response
            .interact(Sense::click());
        if resp.clicked() {
            events.push(NavbarEvent::FocusLocation);
        }
        return;
    }

    let id = ui.id().with("navbar_location");
    if location.select_all {
        location.select_all = false;
        let mut state = TextEditState::load(ui.ctx(), id).unwrap_or_default();
        let end = CCursor::new(location.value.chars().count());
        state
            .cursor
            .set_char_range(Some(CCursorRange::two(CCursor::new(0), end)));
        state.store(ui.ctx(), id);
        ui.memory_mut(|mem| mem.request_focus(id));
    }

    let mut text = location.value.clone();
    let resp = frame
        .show(ui, |ui| {
            ui.add_sized(
                [ui.available_width(), FIELD_HEIGHT],
                TextEdit::singleline(&mut text)
                    .id(id)
                    .return_key(None)
                    .hint_text("Search or enter address")
                    .vertical_align(Align::Center),
            )
        })
        .inner;

    if resp.changed() {
        events.push(NavbarEvent::LocationInput(text));
    }

    let mut handled_key = false;
    if resp.has_focus() {
        let key = if input.enter_pressed {
            Some(LocationKey::Enter)
        } else if input.wants_up() {
            Some(LocationKey::Up)
        } else if input.wants_down() {
            Some(LocationKey::Down)
        } else {
            None
        };
        if let Some(key) = key {
            events.push(NavbarEvent::LocationKey(key));
        }
    }
    if input.escape_pressed && (resp.has_focus() || resp.lost_focus()) {
        events.push(NavbarEvent::LocationKey(LocationKey::Escape));
        handled_key = true;
    }

    if resp.lost_focus() && !handled_key {
        if ui.input(|i| i.pointer.any_down()) {
            location.blur_deferred = true;
        } else {
            events.push(NavbarEvent::BlurLocation);
        }
    }

    if let Some(rows) = &view.dropdown {
        dropdown_ui(ui.ctx(), id.with("dropdown"), resp.rect, rows, events);
    }
}

fn pretty_location_ui(ui: &mut Ui, location: &PrettyLocation) {
    ui.spacing_mut().item_spacing.x = 0.0;
    match location {
        PrettyLocation::Raw(value) => {
            ui.label(value.as_str());
        }
        PrettyLocation::Parts {
            protocol,
            class,
            host,
            path,
        } => {
            let protocol = RichText::new(format!("{protocol}://"));
            let protocol = match class {
                ProtocolClass::Secure => protocol.color(SECURE_COLOR),
                ProtocolClass::PeerToPeer => protocol.color(PEER_TO_PEER_COLOR),
                ProtocolClass::Plain => protocol.weak(),
            };
            ui.label(protocol);
            ui.label(RichText::new(host.as_str()).strong());
            ui.label(RichText::new(path.as_str()).weak());
        }
    }
}

fn dropdown_ui(
    ctx: &Context,
    id: Id,
    anchor: Rect,
    rows: &[DropdownRow],
    events: &mut Vec<NavbarEvent>,
) {
    Area::new(id)
        .order(Order::Foreground)
        .fixed_pos(anchor.left_bottom())
        .show(ctx, |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(anchor.width());
                for row in rows {
                    if dropdown_row(ui, row) {
                        events.push(NavbarEvent::ClickResult { index: row.index });
                    }
                }
            });
        });
}

fn dropdown_row(ui: &mut Ui, row: &DropdownRow) -> bool {
    let fill = if row.selected {
        ui.visuals().selection.bg_fill
    } else {
        Color32::TRANSPARENT
    };
    Frame::new()
        .fill(fill)
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let icon = match row.icon {
                    RowIcon::Search => "🔍",
                    RowIcon::Window => "🗔",
                };
                ui.label(icon);
                row_text(ui, &row.content, false);
                ui.add_space(12.0);
                row_text(ui, &row.title, true);
            });
        })
        .response
        .interact(Sense::click())
        .clicked()
}

fn row_text(ui: &mut Ui, text: &RowText, weak: bool) {
    let style = |rich: RichText| if weak { rich.weak() } else { rich };
    match text {
        RowText::Plain(value) => {
            ui.label(style(RichText::new(value.as_str())));
        }
        RowText::Decorated(decorated) => {
            ui.scope(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for segment in decorated.segments() {
                    let rich = RichText::new(segment.text.as_str());
                    let rich = if segment.emphasized {
                        rich.strong()
                    } else {
                        style(rich)
                    };
                    ui.label(rich);
                }
            });
        }
    }
}
