#[cfg(test)]
mod tests {
    use hikari::{
        camera::{Camera, CameraParameters},
        film::FilmSettings,
        integrators::{GgxEnvironmentParams, IntegratorType},
        materials::{Material, ShadingOverrides},
        math::{Point3, Spectrum, Vec2, Vec3},
        output::write_image,
        renderer::{render, RenderContext, RenderResult, RenderSettings},
        scene::{Scene, SceneSettings, ShapeSettings},
        settings::{EnvironmentSettings, Settings},
    };

    // A floor facing +Z seen straight from above, away from the quad's diagonal
    fn floor_settings(overrides: ShadingOverrides) -> Settings {
        Settings {
            name: "floor".into(),
            film: FilmSettings {
                res: Vec2::new(1, 1),
                tile_rows: 1,
            },
            camera: CameraParameters {
                position: Point3::new(0.2, -0.3, 3.0),
                target: Point3::new(0.2, -0.3, 0.0),
                up: Vec3::new(0.0, 1.0, 0.0),
                fov_y: 10.0,
            },
            scene: SceneSettings {
                shapes: vec![ShapeSettings::Quad {
                    corners: [
                        Point3::new(-1.0, -1.0, 0.0),
                        Point3::new(1.0, -1.0, 0.0),
                        Point3::new(1.0, 1.0, 0.0),
                        Point3::new(-1.0, 1.0, 0.0),
                    ],
                    material: Material::default(),
                }],
            },
            environment: EnvironmentSettings::Constant(Spectrum::from(0.5)),
            integrator: IntegratorType::GgxEnvironment(GgxEnvironmentParams {
                sample_count: 1024,
                overrides,
                ..GgxEnvironmentParams::default()
            }),
            render: RenderSettings {
                thread_count: 1,
                seed: 1,
            },
        }
    }

    fn render_settings(settings: &Settings) -> RenderResult {
        let scene = Scene::build(&settings.scene);
        let camera = Camera::new(settings.camera, settings.film.res);
        let environment = settings.environment.build().unwrap();
        let ctx = RenderContext {
            scene: &scene,
            camera: &camera,
            environment: environment.as_ref(),
        };
        render(&ctx, settings.integrator, &settings.film, &settings.render).unwrap()
    }

    fn render_pixel(settings: &Settings) -> Spectrum<f32> {
        let result = render_settings(settings);
        assert_eq!(result.ray_count, 1);
        result.film.pixel(0, 0)
    }

    fn render_film(settings: &Settings) -> Vec<Spectrum<f32>> {
        render_settings(settings).film.pixels().to_vec()
    }

    fn gold() -> ShadingOverrides {
        ShadingOverrides {
            base_color: Some(Spectrum::new(1.0, 0.766, 0.336)),
            ior: Some(2.0),
            roughness: Some(0.33),
            metallic: Some(1.0),
            ..ShadingOverrides::default()
        }
    }

    fn dielectric() -> ShadingOverrides {
        ShadingOverrides {
            ior: Some(1.0),
            metallic: Some(0.0),
            ..gold()
        }
    }

    #[test]
    fn gold_is_tinted_specular() {
        let gold = render_pixel(&floor_settings(gold()));
        let dielectric = render_pixel(&floor_settings(dielectric()));

        for c in [gold, dielectric] {
            assert!(c.is_finite());
            assert!(c.r >= 0.0 && c.g >= 0.0 && c.b >= 0.0);
        }
        assert!(gold.max_comp() > 0.0);
        assert!(gold.r > gold.g && gold.g > gold.b);
        // Hue follows the base color
        let ratio = gold.b / gold.r;
        assert!(ratio < 0.766, "{:?}", gold);

        let diff = gold - dielectric;
        assert!(diff.r.abs() + diff.g.abs() + diff.b.abs() > 0.01);
    }

    #[test]
    fn metal_has_no_diffuse() {
        // With no specular samples only the diffuse term is left
        let no_specular = |overrides| {
            let mut settings = floor_settings(overrides);
            if let IntegratorType::GgxEnvironment(params) = &mut settings.integrator {
                params.sample_count = 0;
            }
            render_pixel(&settings)
        };

        assert_eq!(no_specular(gold()), Spectrum::zeros());
        let base = Spectrum::new(1.0, 0.766, 0.336);
        assert_eq!(no_specular(dielectric()), base * 0.5);
    }

    #[test]
    fn same_seed_same_image() {
        let mut settings = floor_settings(gold());
        settings.film.res = Vec2::new(8, 8);
        settings.film.tile_rows = 2;
        settings.camera.fov_y = 60.0;
        settings.render.thread_count = 3;

        let first = render_film(&settings);
        let second = render_film(&settings);
        assert_eq!(first, second);

        settings.render.seed = 2;
        assert_ne!(first, render_film(&settings));
    }

    #[test]
    fn yaml_to_image() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = "\
name: yaml
film:
  res:
    x: 6
    y: 4
  tile_rows: 2
environment: !Constant
  r: 0.5
  g: 0.5
  b: 0.5
integrator: !GgxEnvironment
  sample_count: 8
  overrides:
    metal: gold
    roughness: 0.33
    metallic: 1.0
render:
  thread_count: 2
  seed: 7
";
        let settings_path = dir.path().join("scene.yaml");
        std::fs::write(&settings_path, yaml).unwrap();

        let settings = Settings::load(&settings_path).unwrap();
        assert_eq!(settings.film.res, Vec2::new(6, 4));
        assert_eq!(settings.scene, SceneSettings::default());
        match settings.integrator {
            IntegratorType::GgxEnvironment(params) => {
                assert_eq!(params.sample_count, 8);
                assert_eq!(params.overrides.roughness, Some(0.33));
            }
            other => panic!("Unexpected integrator {}", other),
        }

        let pixels = render_film(&settings);
        assert_eq!(pixels.len(), 6 * 4);
        assert!(pixels.iter().all(|p| p.is_finite()));

        let result = render_settings(&settings);
        let out = dir.path().join("out.png");
        write_image(&out, &result.film).unwrap();
        assert!(out.exists());
    }
}
