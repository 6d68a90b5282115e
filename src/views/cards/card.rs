use eframe::egui::epaint::{Mesh, Vertex, WHITE_UV};
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Shape, Stroke};

use super::placeholder::draw_error_placeholder;
use super::stats_row::draw_stats_grid;
use super::tilt::{self, Tilt};
use super::type_badge::{draw_type_badges, type_glow_color};
use crate::api::Pokemon;
use crate::ui_constants::{card as card_c, entry, tilt as tilt_c, CARD_HEIGHT};

/// What the caller needs to know after drawing one card.
pub struct CardResponse {
    pub retry_clicked: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CardError {
    #[error("record has no name")]
    MissingName,
    #[error("record has no types")]
    MissingTypes,
    #[error("record has no usable sprite")]
    MissingSprite,
}

/// Displayable card content, extracted fallibly so one malformed record
/// shows a local placeholder instead of taking down the gallery.
#[derive(Debug)]
pub struct CardData {
    pub name: String,
    pub types: Vec<String>,
    /// Raw primary type name, drives the accent colour.
    pub primary_type: String,
    pub height_m: f32,
    pub weight_kg: f32,
    pub ability: String,
    pub speed: String,
    pub base_exp: String,
}

impl CardData {
    pub fn from_record(p: &Pokemon) -> Result<Self, CardError> {
        if p.name.trim().is_empty() {
            return Err(CardError::MissingName);
        }
        let primary_type = p.primary_type().ok_or(CardError::MissingTypes)?.to_string();
        if p.sprite_url().is_none() {
            return Err(CardError::MissingSprite);
        }

        Ok(Self {
            name: capitalize(&p.name),
            types: p.types.iter().map(|t| capitalize(&t.kind.name)).collect(),
            primary_type,
            // API units are decimetres and hectograms
            height_m: p.height as f32 / 10.0,
            weight_kg: p.weight as f32 / 10.0,
            ability: p
                .first_ability()
                .map(capitalize)
                .unwrap_or_else(|| "N/A".to_string()),
            speed: p
                .speed()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            base_exp: p
                .base_experience
                .map(|b| b.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        })
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render one card: sprite, name, type badges and stats, with the
/// pointer-driven tilt/shine transform while hovered.
pub fn pokemon_card(
    ui: &mut egui::Ui,
    p: &Pokemon,
    ordinal: usize,
    width: f32,
    sprite: Option<&egui::TextureHandle>,
    sprite_failed: bool,
) -> CardResponse {
    let data = match CardData::from_record(p) {
        Ok(d) => d,
        Err(err) => {
            log::warn!("card render failed for '{}' (id={}): {err}", p.name, p.id);
            return draw_error_placeholder(ui, p.id, width);
        }
    };

    let (alloc_rect, _response) =
        ui.allocate_exact_size(egui::vec2(width, CARD_HEIGHT), Sense::hover());
    if !ui.is_rect_visible(alloc_rect) {
        return CardResponse {
            retry_clicked: false,
        };
    }

    // Entry animation: slide up and fade in, staggered by ordinal.
    let appear = entry_progress(ui, p.id, ordinal);
    let rect = alloc_rect.translate(egui::vec2(0.0, (1.0 - appear) * entry::SLIDE_PX));
    let alpha = appear;

    // One transform per pointer sample; pointer exit falls back to rest.
    let tilt = ui
        .input(|i| i.pointer.hover_pos())
        .filter(|pos| rect.contains(*pos))
        .and_then(|pos| tilt::tilt_for_pointer(rect, pos))
        .unwrap_or_else(Tilt::rest);

    let corners = tilt::project_corners(rect, &tilt);
    // Scaled/tilted geometry pokes a little past the allocated rect.
    let painter = ui.painter_at(rect.expand(32.0));

    let fill = Color32::from_rgba_unmultiplied(30, 41, 59, 235).gamma_multiply(alpha);
    let glow = type_glow_color(&data.primary_type).gamma_multiply(0.85 * alpha);

    if tilt.is_rest() {
        let rounding = Rounding::same(card_c::ROUNDING);
        painter.rect_filled(rect, rounding, fill);
        painter.rect_stroke(rect, rounding, Stroke::new(1.5, glow));
    } else {
        fill_quad(&painter, &corners, fill);
        painter.add(Shape::closed_line(corners.to_vec(), Stroke::new(1.5, glow)));
    }

    // Sprite area
    let sprite_quad = tilt::quad_sub(
        &corners,
        card_c::SPRITE_LEFT_U,
        card_c::SPRITE_TOP_V,
        card_c::SPRITE_RIGHT_U,
        card_c::SPRITE_BOTTOM_V,
    );
    let mut retry_clicked = false;
    match sprite {
        Some(tex) => {
            textured_quad(
                &painter,
                tex.id(),
                &sprite_quad,
                Color32::WHITE.gamma_multiply(alpha),
            );
        }
        None => {
            fill_quad(
                &painter,
                &sprite_quad,
                Color32::from_rgba_unmultiplied(255, 255, 255, 10).gamma_multiply(alpha),
            );
            let centre = tilt::quad_point(&corners, 0.5, 0.26);
            if sprite_failed {
                painter.text(
                    centre,
                    Align2::CENTER_CENTER,
                    "sprite unavailable",
                    FontId::proportional(13.0),
                    Color32::from_gray(140).gamma_multiply(alpha),
                );
                retry_clicked |= sprite_retry_button(ui, &painter, p.id, &corners, alpha);
            } else {
                painter.text(
                    centre,
                    Align2::CENTER_CENTER,
                    "…",
                    FontId::proportional(22.0),
                    Color32::from_gray(120).gamma_multiply(alpha),
                );
            }
        }
    }

    // Name
    painter.text(
        tilt::quad_point(&corners, 0.5, card_c::NAME_V),
        Align2::CENTER_CENTER,
        &data.name,
        FontId::proportional(24.0),
        Color32::WHITE.gamma_multiply(alpha),
    );

    draw_type_badges(ui, &painter, &corners, &data, alpha);
    draw_stats_grid(&painter, &corners, &data, alpha);

    if tilt.shine_opacity > 0.0 {
        paint_shine(&painter, &corners, rect, &tilt);
    }

    CardResponse { retry_clicked }
}

/// 0..=1 progress of the entry animation, easing out. First-seen time lives
/// in temp memory so the animation survives relayouts and filtering.
fn entry_progress(ui: &egui::Ui, id: u32, ordinal: usize) -> f32 {
    let key = egui::Id::new(("card_entry", id));
    let now = ui.input(|i| i.time);
    let first_seen = ui.memory_mut(|m| *m.data.get_temp_mut_or_insert_with(key, || now));
    let delay = ordinal as f64 * entry::STAGGER_SECS;
    let t = ((now - first_seen - delay) / entry::DURATION_SECS).clamp(0.0, 1.0) as f32;
    if t < 1.0 {
        ui.ctx().request_repaint();
    }
    1.0 - (1.0 - t) * (1.0 - t)
}

fn sprite_retry_button(
    ui: &mut egui::Ui,
    painter: &egui::Painter,
    id: u32,
    corners: &[Pos2; 4],
    alpha: f32,
) -> bool {
    let btn_rect = Rect::from_center_size(
        tilt::quad_point(corners, 0.5, 0.34),
        egui::vec2(64.0, 22.0),
    );
    let resp = ui
        .interact(btn_rect, ui.id().with(("sprite_retry", id)), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    let bg = if resp.hovered() {
        Color32::from_gray(80)
    } else {
        Color32::from_gray(60)
    };
    painter.rect_filled(
        btn_rect,
        Rounding::same(card_c::BADGE_ROUNDING),
        bg.gamma_multiply(alpha),
    );
    painter.text(
        btn_rect.center(),
        Align2::CENTER_CENTER,
        "Retry",
        FontId::proportional(12.0),
        Color32::from_gray(230).gamma_multiply(alpha),
    );
    resp.clicked()
}

fn fill_quad(painter: &egui::Painter, corners: &[Pos2; 4], color: Color32) {
    let mut mesh = Mesh::default();
    for p in corners {
        mesh.vertices.push(Vertex {
            pos: *p,
            uv: WHITE_UV,
            color,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

fn textured_quad(
    painter: &egui::Painter,
    tex_id: egui::TextureId,
    corners: &[Pos2; 4],
    tint: Color32,
) {
    let mut mesh = Mesh::with_texture(tex_id);
    let uvs = [
        egui::pos2(0.0, 0.0),
        egui::pos2(1.0, 0.0),
        egui::pos2(1.0, 1.0),
        egui::pos2(0.0, 1.0),
    ];
    for (p, uv) in corners.iter().zip(uvs) {
        mesh.vertices.push(Vertex {
            pos: *p,
            uv,
            color: tint,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Radial white highlight centred at (shine_x%, shine_y%), fading to
/// transparent: a triangle fan, like the circular progress meshes.
fn paint_shine(painter: &egui::Painter, corners: &[Pos2; 4], rect: Rect, tilt: &Tilt) {
    let centre = tilt::quad_point(corners, tilt.shine_x / 100.0, tilt.shine_y / 100.0);
    let radius = rect.size().length() * tilt_c::SHINE_RADIUS_FRAC;
    let peak = (tilt_c::SHINE_ALPHA as f32 * tilt.shine_opacity).round() as u8;
    let centre_color = Color32::from_rgba_unmultiplied(255, 255, 255, peak);
    let edge_color = Color32::TRANSPARENT;

    let segments = 48u32;
    let mut mesh = Mesh::default();
    mesh.vertices.push(Vertex {
        pos: centre,
        uv: WHITE_UV,
        color: centre_color,
    });
    for i in 0..=segments {
        let a = i as f32 / segments as f32 * std::f32::consts::TAU;
        mesh.vertices.push(Vertex {
            pos: centre + egui::vec2(a.cos(), a.sin()) * radius,
            uv: WHITE_UV,
            color: edge_color,
        });
    }
    for i in 0..segments {
        mesh.add_triangle(0, 1 + i, 2 + i);
    }
    painter.add(Shape::mesh(mesh));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_card_data_from_well_formed_record() {
        let mut p = Pokemon::sample(1, "bulbasaur");
        p.set_speed(45);
        let d = CardData::from_record(&p).unwrap();
        assert_eq!(d.name, "Bulbasaur");
        assert_eq!(d.types, ["Grass"]);
        assert_eq!(d.primary_type, "grass");
        assert!((d.height_m - 0.7).abs() < 1e-6);
        assert!((d.weight_kg - 6.9).abs() < 1e-6);
        assert_eq!(d.ability, "Overgrow");
        assert_eq!(d.speed, "45");
        assert_eq!(d.base_exp, "64");
    }

    #[test]
    fn missing_pieces_fall_back_instead_of_failing() {
        let mut p = Pokemon::sample(132, "ditto");
        p.abilities.clear();
        p.base_experience = None;
        let d = CardData::from_record(&p).unwrap();
        assert_eq!(d.ability, "N/A");
        assert_eq!(d.speed, "N/A");
        assert_eq!(d.base_exp, "N/A");
    }

    #[test]
    fn malformed_record_is_rejected_not_paniced_on() {
        let mut no_types = Pokemon::sample(1, "bulbasaur");
        no_types.types.clear();
        assert_eq!(
            CardData::from_record(&no_types).unwrap_err(),
            CardError::MissingTypes
        );

        let mut no_sprite = Pokemon::sample(2, "ivysaur");
        no_sprite.sprites = Default::default();
        assert_eq!(
            CardData::from_record(&no_sprite).unwrap_err(),
            CardError::MissingSprite
        );

        let unnamed = Pokemon {
            name: "  ".to_string(),
            ..Pokemon::sample(3, "x")
        };
        assert_eq!(
            CardData::from_record(&unnamed).unwrap_err(),
            CardError::MissingName
        );
    }

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize("charmander"), "Charmander");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
    }
}
