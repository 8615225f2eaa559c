//! Рендеринг HTML-страницы списка устройств.

use dcm_entities::devices::Model;

const DEVICES_TEMPLATE: &str = include_str!("../templates/devices.html");

/// Модель представления страницы: ключ `devices`.
#[derive(Debug, Clone)]
pub struct DevicesView {
    pub devices: Vec<Model>,
}

/// Отрисовать страницу списка.
pub fn render_devices_page(view: &DevicesView) -> String {
    let mut rows = String::new();
    for device in &view.devices {
        render_row(&mut rows, device);
    }
    DEVICES_TEMPLATE.replace("{{rows}}", &rows)
}

fn render_row(out: &mut String, device: &Model) {
    let cells = [
        &device.name,
        &device.mac_address,
        &device.ip_address,
        &device.device_type,
        &device.serial_number,
        &device.owner,
        &device.config,
    ];

    out.push_str(&format!("      <tr data-device-id=\"{}\">", device.id));
    out.push_str(&format!("<td>{}</td>", device.id));
    for cell in cells {
        out.push_str(&format!(
            "<td>{}</td>",
            escape_html(cell.as_deref().unwrap_or(""))
        ));
    }
    out.push_str(&format!(
        "<td><form class=\"inline\" method=\"post\" action=\"/devices/view/delete/{}\">\
         <button type=\"submit\">Delete</button></form></td></tr>\n",
        device.id
    ));
}

/// Экранировать текст для вставки в HTML.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
