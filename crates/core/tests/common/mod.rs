use std::cell::{Cell, RefCell};
use std::rc::Rc;

use assetmap_api::map::{MapSurface, MarkerHandle, MarkerStyle};
use assetmap_api::models::{AssetId, FeeValue, GeoPoint, VacancyLevel};
use assetmap_core::model::{AssetRecord, AssetStore};

/// One operation issued against the map capability, as observed by the
/// recording surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Create {
        center: GeoPoint,
        zoom: u8,
    },
    Place {
        handle: MarkerHandle,
        at: GeoPoint,
        style: MarkerStyle,
    },
    Remove {
        handle: MarkerHandle,
    },
    Pan {
        center: GeoPoint,
        zoom: u8,
        animate: bool,
    },
    Destroy,
}

/// Map capability stand-in that records every operation. The log is
/// shared so it stays readable after the dashboard consumes the
/// surface.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    log: Rc<RefCell<Vec<SurfaceOp>>>,
    next_handle: Rc<Cell<u64>>,
}

impl RecordingSurface {
    pub fn new() -> (Self, SurfaceLog) {
        let surface = Self::default();
        let log = SurfaceLog {
            ops: surface.log.clone(),
        };
        (surface, log)
    }
}

impl MapSurface for RecordingSurface {
    fn create_map(&mut self, center: GeoPoint, zoom: u8) {
        self.log.borrow_mut().push(SurfaceOp::Create { center, zoom });
    }

    fn place_marker(&mut self, at: GeoPoint, style: MarkerStyle) -> MarkerHandle {
        let handle = MarkerHandle(self.next_handle.get());
        self.next_handle.set(handle.0 + 1);
        self.log
            .borrow_mut()
            .push(SurfaceOp::Place { handle, at, style });
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.log.borrow_mut().push(SurfaceOp::Remove { handle });
    }

    fn pan_to(&mut self, center: GeoPoint, zoom: u8, animate: bool) {
        self.log.borrow_mut().push(SurfaceOp::Pan {
            center,
            zoom,
            animate,
        });
    }

    fn destroy_map(&mut self) {
        self.log.borrow_mut().push(SurfaceOp::Destroy);
    }
}

pub struct SurfaceLog {
    ops: Rc<RefCell<Vec<SurfaceOp>>>,
}

impl SurfaceLog {
    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.ops.borrow().clone()
    }

    /// Drop everything observed so far; the next read starts fresh.
    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
    }

    pub fn placements(&self) -> Vec<(MarkerHandle, GeoPoint, MarkerStyle)> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                SurfaceOp::Place { handle, at, style } => Some((handle, at, style)),
                _ => None,
            })
            .collect()
    }

    pub fn removals(&self) -> Vec<MarkerHandle> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                SurfaceOp::Remove { handle } => Some(handle),
                _ => None,
            })
            .collect()
    }

    pub fn pans(&self) -> Vec<(GeoPoint, u8, bool)> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                SurfaceOp::Pan {
                    center,
                    zoom,
                    animate,
                } => Some((center, zoom, animate)),
                _ => None,
            })
            .collect()
    }
}

pub fn asset(id: u32, name: &str, category: &str, geometry: &str) -> AssetRecord {
    AssetRecord {
        id: AssetId(id),
        name: name.to_string(),
        category: category.to_string(),
        address: format!("{} Sample Road", id),
        geometry: geometry.to_string(),
        road_context: String::new(),
        landmarks: String::new(),
        operating_total_sqm: None,
        asset_total_sqm: None,
        operating_sqm: None,
        vacant_area_sqm: 0.0,
        vacancy_rate_percent: 0.0,
        vacancy_level: VacancyLevel::None,
        rent_per_sqm_month: String::new(),
        management_fee: FeeValue::Text(String::new()),
        leasing_contact: String::new(),
        operations_contact: String::new(),
        management_unit: String::new(),
    }
}

/// Five assets: three placeable, two with the malformed geometries of
/// the tolerance contract (one truncated, one non-numeric).
pub fn sample_store() -> AssetStore {
    let mut riverside = asset(1, "Riverside Plaza", "Commercial", "30.66,104.07");
    riverside.vacancy_level = VacancyLevel::High;
    riverside.landmarks = "East Lake Park".to_string();

    let mut depot = asset(2, "North Gate Depot", "Warehouse", "30.70,104.10");
    depot.vacancy_level = VacancyLevel::Medium;

    let mut tower = asset(3, "Jinjiang Tower", "Office", "30.6");
    tower.vacancy_level = VacancyLevel::Low;

    let market = asset(4, "West Market Hall", "Retail", "abc,def");

    let mut yard = asset(5, "South Yard", "Industrial", "30.61,104.05");
    yard.vacancy_level = VacancyLevel::High;

    AssetStore::new(vec![riverside, depot, tower, market, yard]).unwrap()
}
