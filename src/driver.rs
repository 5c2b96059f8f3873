//! Run driver: configuration in, report and plot out.

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info, warn};
use vaultarc_core::units::{format_inches, unit_label};
use vaultarc_core::Result;
use vaultarc_designer::{Ellipse, EllipseCenter, MeasurementTable, Plot, Point, WallOutline};
use vaultarc_settings::{ArcVariant, Config};

use crate::report;
use crate::CONFIG_ENV_VAR;

/// Everything a run derives from its configuration.
#[derive(Debug, Clone)]
pub struct CeilingProfile {
    pub variant: ArcVariant,
    pub ellipse: Ellipse,
    pub arc: Vec<Point>,
    pub table: MeasurementTable,
    pub foci: (Point, Point),
    pub wall: WallOutline,
}

/// Loads the config named by `VAULTARC_CONFIG`, or the built-in room fixture.
pub fn load_config() -> anyhow::Result<Config> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => {
            let path = PathBuf::from(path);
            info!(path = %path.display(), "loading configuration");
            Config::load_from_file(&path).map_err(|e| {
                warn!(path = %path.display(), error = %e, "configuration rejected");
                anyhow::anyhow!("Failed to load {}: {}", path.display(), e)
            })
        }
        None => {
            debug!("no {} set, using reference room", CONFIG_ENV_VAR);
            Ok(Config::default())
        }
    }
}

/// Reference ellipse for `variant`: centered at the flat ceiling's height,
/// reaching the flat ceiling's midpoint along x, rising by `arc.rise_in`.
pub fn build_ellipse(config: &Config, variant: ArcVariant) -> Ellipse {
    let (cx, cy) = config.ellipse_center(variant);
    EllipseCenter::new(Point::new(cx, cy))
        .with_axes(config.semi_axis_a(variant), config.arc.rise_in)
}

/// Derives arc, measurement table, foci and wall outline for the selected variant.
pub fn compute(config: &Config) -> Result<CeilingProfile> {
    let variant = config.arc.variant;
    for candidate in [ArcVariant::Walls, ArcVariant::CeilingVertex] {
        debug!(variant = %candidate, ellipse = %build_ellipse(config, candidate), "reference ellipse");
    }

    let ellipse = build_ellipse(config, variant);
    info!(%variant, %ellipse, "selected ceiling ellipse");

    let arc = ellipse.parametric_arc(
        config.arc.samples,
        config.arc.t0(variant),
        config.arc.t1(),
    );
    let table = MeasurementTable::for_ceiling(&ellipse, config.measurement.interval_in)?;
    let foci = ellipse.foci()?;
    let eccentricity = ellipse.eccentricity()?;
    debug!(eccentricity, "ellipse shape");

    let room = &config.room;
    let wall = WallOutline::sloped_room(
        room.width_in,
        room.low_wall_height_in,
        room.ceiling_run_in,
        room.peak_height_in,
    );
    info!(
        width = %format_inches(room.width_in),
        span = %format_inches(ellipse.x_max()),
        unit = unit_label(),
        "room profile computed"
    );

    Ok(CeilingProfile {
        variant,
        ellipse,
        arc,
        table,
        foci,
        wall,
    })
}

/// Wall outline in black, arc in red, foci as red markers.
pub fn ceiling_plot(profile: &CeilingProfile, config: &Config) -> Plot {
    let settings = &config.plot;
    let mut plot = Plot::new(settings.width_px, settings.height_px).with_padding(settings.padding);
    plot.add_line("wall", profile.wall.vertices().to_vec(), "black", true);
    plot.add_line("arc", profile.arc.clone(), "red", false);
    plot.add_markers("foci", vec![profile.foci.0, profile.foci.1], "red");
    plot
}

/// Runs the full pipeline: table to `out`, plot to `config.plot.output_path`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<CeilingProfile> {
    let profile = compute(config)?;
    report::write_table(out, &profile.table)?;
    out.flush()?;

    ceiling_plot(&profile, config).save(&config.plot.output_path)?;
    Ok(profile)
}
