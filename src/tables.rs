use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Salesforce custom field key carrying the product the lead is interested in.
pub const FIELD_PRODUCT_INTEREST: &str = "00N0o00000M9Lpq";
/// Salesforce custom field key carrying the lead's Facebook profile.
pub const FIELD_FACEBOOK: &str = "00NBV000000Piur";
/// Salesforce custom field key carrying the assigned salesman.
pub const FIELD_SALESMAN: &str = "00NBV000000VDf4";

/// Form field key -> Vietnamese label for the notification lines that are
/// looked up. "Công ty" and "Salesman" are written directly by the message
/// builder and are not in this table.
pub static DISPLAY_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("full_name", "Họ tên"),
        ("mobile", "Điện thoại"),
        ("email", "Email"),
        ("description", "Ghi chú"),
        (FIELD_PRODUCT_INTEREST, "SP sẽ chào"),
        (FIELD_FACEBOOK, "Facebook"),
        ("url", "Trang web"),
        ("lead_source", "Nguồn Lead"),
    ])
});

/// Product name as submitted by the form -> hashtag-annotated display string
/// for the Telegram notification. Values not in this table pass through
/// verbatim.
pub static PRODUCT_HASHTAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Tay khoan Morita", "#Taykhoan #Morita"),
        (
            "Máy Scan Cruxell / XQ Chóp",
            "Máy Scan #Cruxell #CRX1000 / XQ Chóp #V080",
        ),
        ("Nội nha TRZX2, ĐVC", "Nội nha #TRZX2+, ĐVC"),
        (
            "Máy phẫu thuật Siêu âm Mectron",
            "#MECTRON #PIEZOSURGERY Máy phẫu thuật Siêu âm",
        ),
        (
            "Tay rung rửa nội nha EndoUltra",
            "Tay rung rửa nội nha #EndoUltra",
        ),
        ("Pink Wave", "Đèn trám quang trùng hợp #PinkWave"),
        ("Máy hút trung tâm", "Máy hút trung tâm #TCTS2 #TOYKYOGIKEN"),
        ("Máy CBCT Morita", "Máy #CBCT #Morita"),
        ("Máy Pano IC5HD", "Máy Pano #IC5HD"),
        ("Ghế nha khoa cao cấp", "Ghế nha khoa cao cấp #SIGNO"),
        ("Máy Laser nha khoa", "Máy #Laser nha khoa"),
        ("Chất hàn tạm Calcipex II", "Calci đặt ống tủy #Calcipex II"),
        ("SmearOFF", "Dung dịch #VistaApex #SmearOFF"),
        ("Chlor-XTRA", "Dung dịch #VistaApex #ChlorXTRA"),
        (
            "Vật liệu trám bít ống tủy BG Multi",
            "Vật liệu trám bít ống tủy #BGMulti #Nishika",
        ),
        (
            "Chất chống nhạy cảm ngà Nanoseal",
            "Chất chống nhạy cảm ngà #Nanoseal #Nishika",
        ),
        ("I do Implant", "I do Implant #IDO #Implant"),
        ("Trâm files EndoStar", "Trâm files #EndoStar"),
        ("Workshop/Webinar", "Workshop"),
        ("Tạo kết nối, tư vấn khác", "Liên hệ, tư vấn"),
        ("&#128205;Sếp giao Account", "&#128205;Sếp giao Account"),
    ])
});

/// Returns the display label for a form field, falling back to the field key
/// itself for unknown fields.
pub fn display_label(field: &str) -> &str {
    DISPLAY_LABELS.get(field).copied().unwrap_or(field)
}

/// Returns the hashtag-annotated display string for a product, falling back
/// to the raw value for products not in the table.
pub fn product_display(raw: &str) -> &str {
    PRODUCT_HASHTAGS.get(raw).copied().unwrap_or(raw)
}
