use kidsmap_core::Hospital;

/// Free text handed to a share or clipboard facility
pub fn format_share_text(hospital: &Hospital) -> String {
    let mut lines = vec![hospital.name.clone()];
    if !hospital.address.is_empty() {
        lines.push(format!("주소: {}", hospital.address));
    }
    if !hospital.phone.is_empty() {
        lines.push(format!("전화: {}", hospital.phone));
    }
    lines.join("\n")
}
