use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    camera::CameraParameters,
    film::FilmSettings,
    hikari_info,
    integrators::IntegratorType,
    math::Spectrum,
    renderer::RenderSettings,
    scene::SceneSettings,
    textures::{ConstantEnvironment, CubeMap, Environment, LoadError, TexelFilter},
};

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(why) => write!(f, "IO error: {}", why),
            SettingsError::Parse(why) => write!(f, "Parse error: {}", why),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(why: std::io::Error) -> Self {
        SettingsError::Io(why)
    }
}

impl From<serde_yaml::Error> for SettingsError {
    fn from(why: serde_yaml::Error) -> Self {
        SettingsError::Parse(why)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum EnvironmentSettings {
    Constant(Spectrum<f32>),
    /// Faces are read from `<dir>/<face>.<extension>`, e.g. `posx.png`
    CubeMap {
        dir: PathBuf,
        #[serde(default = "default_extension")]
        extension: String,
        #[serde(default)]
        filter: TexelFilter,
        /// Replace faces that fail to load with gray instead of failing
        #[serde(default)]
        lenient: bool,
    },
}

fn default_extension() -> String {
    "png".into()
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        EnvironmentSettings::Constant(Spectrum::from(0.5))
    }
}

impl EnvironmentSettings {
    pub fn build(&self) -> Result<Box<dyn Environment>, LoadError> {
        match self {
            EnvironmentSettings::Constant(value) => Ok(Box::new(ConstantEnvironment::new(*value))),
            EnvironmentSettings::CubeMap {
                dir,
                extension,
                filter,
                lenient,
            } => {
                let cube_map = if *lenient {
                    CubeMap::load_lenient(dir, extension, *filter)
                } else {
                    CubeMap::load(dir, extension, *filter)?
                };
                hikari_info!("Cube map loaded from '{}'", dir.to_string_lossy());
                Ok(Box::new(cube_map))
            }
        }
    }
}

/// Everything needed to produce one image.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Used as the prefix of generated output file names
    pub name: String,
    pub film: FilmSettings,
    pub camera: CameraParameters,
    pub scene: SceneSettings,
    pub environment: EnvironmentSettings,
    pub integrator: IntegratorType,
    pub render: RenderSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "hikari".into(),
            film: FilmSettings::default(),
            camera: CameraParameters::default(),
            scene: SceneSettings::default(),
            environment: EnvironmentSettings::default(),
            integrator: IntegratorType::default(),
            render: RenderSettings::default(),
        }
    }
}

impl Settings {
    /// Reads settings from a YAML file.
    ///
    /// A relative cube map directory is resolved against the directory of the file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        let mut settings = Self::from_yaml(&text)?;

        if let EnvironmentSettings::CubeMap { dir, .. } = &mut settings.environment {
            if dir.is_relative() {
                if let Some(parent) = path.parent() {
                    *dir = parent.join(&*dir);
                }
            }
        }

        Ok(settings)
    }

    pub fn from_yaml(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml(&self) -> Result<String, SettingsError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
