use assetmap_api::models::{AssetId, VacancyLevel};
use assetmap_core::model::AssetRecord;
use nu_ansi_term::Color;
use tabled::{Table, Tabled, settings::Style};

/// A terminal-optimized row for one asset (detailed)
#[derive(Tabled)]
pub struct AssetRowView {
    pub id: String,
    pub name: String,
    pub vacancy: String,
    pub category: String,
    pub address: String,
    pub area: String,
}

/// A short row for one asset
#[derive(Tabled)]
pub struct AssetRowViewShort {
    pub id: String,
    pub name: String,
    pub vacancy: String,
}

impl AssetRowView {
    pub fn from_asset(asset: &AssetRecord, selected: Option<AssetId>) -> Self {
        Self {
            id: mark_selected(asset, selected),
            name: asset.name.clone(),
            vacancy: asset.vacancy_level.to_string(),
            category: asset.category.clone(),
            address: asset.address.clone(),
            area: asset
                .area_sqm()
                .map(|sqm| format!("{} sqm", sqm))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl AssetRowViewShort {
    pub fn from_asset(asset: &AssetRecord, selected: Option<AssetId>) -> Self {
        Self {
            id: mark_selected(asset, selected),
            name: asset.name.clone(),
            vacancy: asset.vacancy_level.to_string(),
        }
    }
}

fn mark_selected(asset: &AssetRecord, selected: Option<AssetId>) -> String {
    if selected == Some(asset.id) {
        format!("{}*", asset.id)
    } else {
        asset.id.to_string()
    }
}

pub fn asset_table(assets: &[&AssetRecord], selected: Option<AssetId>, long: bool) -> String {
    if long {
        let views: Vec<AssetRowView> = assets
            .iter()
            .map(|asset| AssetRowView::from_asset(asset, selected))
            .collect();
        Table::new(&views).with(Style::psql()).to_string()
    } else {
        let views: Vec<AssetRowViewShort> = assets
            .iter()
            .map(|asset| AssetRowViewShort::from_asset(asset, selected))
            .collect();
        Table::new(&views).with(Style::psql()).to_string()
    }
}

pub fn vacancy_badge(level: VacancyLevel) -> String {
    let color = match level {
        VacancyLevel::High => Color::Red,
        VacancyLevel::Medium => Color::Yellow,
        VacancyLevel::Low | VacancyLevel::None => Color::Green,
    };
    color.paint(format!("[{} vacancy]", level)).to_string()
}

/// The detail panel for one asset, as a styled multi-line block.
pub fn render_detail(asset: &AssetRecord) -> String {
    let label = |text: &str| Color::DarkGray.paint(text.to_string()).to_string();

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}\n",
        Color::LightBlue.bold().paint(asset.name.as_str()),
        vacancy_badge(asset.vacancy_level)
    ));
    out.push_str(&format!(
        "{} {} · {}\n",
        label("id"),
        asset.id,
        asset.category
    ));
    out.push_str(&format!("{} {}\n", label("address"), asset.address));
    if !asset.road_context.is_empty() {
        out.push_str(&format!("{} {}\n", label("roads"), asset.road_context));
    }
    if !asset.landmarks.is_empty() {
        out.push_str(&format!("{} {}\n", label("landmarks"), asset.landmarks));
    }

    let area = asset
        .area_sqm()
        .map(|sqm| format!("{} sqm", sqm))
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!(
        "{} {}  {} {}% ({} sqm vacant)\n",
        label("area"),
        area,
        label("vacancy"),
        asset.vacancy_rate_percent,
        asset.vacant_area_sqm
    ));

    let rent = if asset.rent_per_sqm_month.is_empty() {
        "-".to_string()
    } else {
        asset.rent_per_sqm_month.clone()
    };
    let fee = if asset.management_fee.is_absent() {
        "-".to_string()
    } else {
        asset.management_fee.to_string()
    };
    out.push_str(&format!(
        "{} {} /sqm/month  {} {}\n",
        label("rent"),
        rent,
        label("mgmt fee"),
        fee
    ));

    out.push_str(&format!(
        "{} {}\n",
        label("leasing"),
        contact_line(asset.leasing())
    ));
    out.push_str(&format!(
        "{} {}\n",
        label("operations"),
        contact_line(asset.operations())
    ));
    out.push_str(&format!(
        "{} {}",
        label("managed by"),
        if asset.management_unit.is_empty() {
            "-"
        } else {
            asset.management_unit.as_str()
        }
    ));
    out
}

fn contact_line(contact: Option<assetmap_core::model::Contact<'_>>) -> String {
    match contact {
        Some(c) => match c.phone() {
            Some(phone) => format!("{} ({})", c.name(), phone),
            None => c.name().to_string(),
        },
        None => "-".to_string(),
    }
}
