pub mod vehicle_controller;
pub mod trip_controller;
pub mod fuel_controller;
pub mod maintenance_controller;
pub mod dashboard_controller;
