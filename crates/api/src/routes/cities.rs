//! Static city list endpoint.

use axum::Json;

/// The cities available for pickup and delivery, in presentation order.
/// Static configuration data, not derived from storage.
pub static CITIES: [&str; 20] = [
    "Москва",
    "Санкт-Петербург",
    "Новосибирск",
    "Екатеринбург",
    "Казань",
    "Нижний Новгород",
    "Челябинск",
    "Самара",
    "Уфа",
    "Ростов-на-Дону",
    "Краснодар",
    "Пермь",
    "Воронеж",
    "Волгоград",
    "Красноярск",
    "Саратов",
    "Тюмень",
    "Тольятти",
    "Ижевск",
    "Барнаул",
];

/// GET /cities — returns the fixed city list.
pub async fn list() -> Json<&'static [&'static str]> {
    Json(CITIES.as_slice())
}
