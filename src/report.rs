//! Human-readable text report for a calculation result.

use std::fmt;

use crate::engine::types::{ResultBundle, Severity};

impl fmt::Display for ResultBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Solar System Estimate ---")?;
        writeln!(f, "Location:              {}", self.site.region_label)?;
        writeln!(
            f,
            "Solar resource:        {:.0} kWh/m²/yr ({:.1} peak sun hours)",
            self.site.annual_irradiance_kwh_m2, self.site.peak_sun_hours
        )?;
        writeln!(f, "Published size:        {:.2} kW", self.sizing.nominal_kw)?;
        writeln!(f, "Engineering size:      {:.2} kW", self.sizing.actual_kw)?;
        writeln!(
            f,
            "Annual production:     {:.0} kWh ({:.2} kWh/day)",
            self.sizing.annual_production_kwh, self.sizing.average_daily_production_kwh
        )?;
        writeln!(
            f,
            "Performance ratio:     {:.0}%",
            self.sizing.performance_ratio_pct
        )?;

        writeln!(f)?;
        writeln!(f, "--- Load ---")?;
        writeln!(
            f,
            "Daily consumption:     {:.2} kWh",
            self.load.total_daily_kwh
        )?;
        writeln!(
            f,
            "Peak demand:           {:.0} W (load factor {:.2})",
            self.load.peak_simultaneous_w, self.load.load_factor
        )?;
        writeln!(
            f,
            "Backup capacity:       {:.0} W for {:.0} h ({:.2} kWh)",
            self.load.backup_capacity_w, self.load.autonomy_hours,
            self.load.autonomy_energy_kwh
        )?;

        writeln!(f)?;
        writeln!(f, "--- Equipment ---")?;
        let p = &self.equipment.panels;
        writeln!(
            f,
            "Panels:                {} x {} {} ({:.0} W) — ${:.0}",
            p.quantity, p.panel.brand, p.panel.model, p.panel.wattage_w, p.total_cost_usd
        )?;
        let i = &self.equipment.inverter;
        writeln!(
            f,
            "Inverter:              {} x {} {} ({:.0} W, {:.0}% margin) — ${:.0}",
            i.quantity, i.inverter.brand, i.inverter.model, i.total_power_w,
            i.adequacy_margin_pct, i.total_cost_usd
        )?;
        let b = &self.equipment.batteries;
        writeln!(
            f,
            "Batteries:             {} x {} {} ({}, {:.1} kWh, {:.1} h autonomy) — ${:.0}",
            b.quantity,
            b.battery.brand,
            b.battery.model,
            b.battery.chemistry.label(),
            b.total_energy_kwh,
            b.autonomy_provided_h,
            b.total_cost_usd
        )?;
        match &self.equipment.charge_controller {
            Some(c) => writeln!(
                f,
                "Charge controller:     {} {} ({:.0} A, {:.0}% used) — ${:.0}",
                c.controller.brand, c.controller.model, c.controller.current_a,
                c.utilization_pct, c.total_cost_usd
            )?,
            None => writeln!(f, "Charge controller:     integrated in inverter")?,
        }
        writeln!(
            f,
            "Total system cost:     ${:.0} (${:.2}/W)",
            self.equipment.costs.total_usd, self.equipment.costs.per_watt_usd
        )?;

        writeln!(f)?;
        writeln!(f, "--- Monthly Production ---")?;
        for row in &self.monthly_production {
            writeln!(
                f,
                "{:<10} {:>6.0} kWh ({:>5.2} kWh/day)",
                row.month, row.production_kwh, row.daily_average_kwh
            )?;
        }

        writeln!(f)?;
        writeln!(f, "--- Economics ---")?;
        let e = &self.economics;
        writeln!(
            f,
            "Tariff basis:          ${:.2}/kWh",
            e.electricity_cost_usd_per_kwh
        )?;
        writeln!(f, "Annual savings:        ${:.0}", e.annual_savings_usd)?;
        writeln!(f, "Simple payback:        {:.1} years", e.simple_payback_years)?;
        writeln!(f, "25-year NPV:           ${:.0}", e.npv_25yr_usd)?;
        writeln!(f, "25-year ROI:           {:.0}%", e.roi_25yr_pct)?;
        writeln!(f, "LCOE:                  ${:.3}/kWh", e.lcoe_usd_per_kwh)?;
        writeln!(
            f,
            "CO2 avoided:           {:.0} kg/yr ({:.0} kg lifetime)",
            e.annual_co2_avoided_kg, e.lifetime_co2_avoided_kg
        )?;

        writeln!(f)?;
        writeln!(f, "--- Installation ({}) ---", self.installation.total_duration)?;
        for phase in &self.installation.phases {
            writeln!(
                f,
                "{:<36} {:>10}  ${:.0}",
                phase.name, phase.duration, phase.cost_usd
            )?;
        }

        if !self.equipment.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Selection Notes ---")?;
            for note in &self.equipment.notes {
                writeln!(f, "* {note}")?;
            }
        }

        if !self.recommendations.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Recommendations ---")?;
            for rec in &self.recommendations {
                let tag = match rec.severity {
                    Severity::Info => "info",
                    Severity::Warning => "warning",
                };
                writeln!(f, "[{tag}] {}", rec.message)?;
            }
        }

        writeln!(f)?;
        write!(f, "Note: {}", self.economics.disclaimer)
    }
}
