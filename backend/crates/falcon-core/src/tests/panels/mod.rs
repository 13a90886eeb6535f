mod alert_panel;
mod display;
mod monitoring_grid;
mod personnel_roster;
mod status_cards;
mod system_metrics;
