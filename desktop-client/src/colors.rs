use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(200, 200, 200);
pub const GRID_LINE: Color32 = Color32::from_rgb(80, 80, 80);
pub const PLAYER_MARK: Color32 = Color32::from_rgb(230, 41, 55);
pub const OPPONENT_MARK: Color32 = Color32::from_rgb(0, 121, 241);
pub const WINNER_TEXT: Color32 = Color32::from_rgb(0, 158, 47);
pub const HINT_TEXT: Color32 = Color32::from_rgb(80, 80, 80);

// Premultiplied: sky blue at 30% and the background at 75%.
pub const HOVER: Color32 = Color32::from_rgba_premultiplied(31, 57, 77, 77);
pub const FADE: Color32 = Color32::from_rgba_premultiplied(150, 150, 150, 191);
