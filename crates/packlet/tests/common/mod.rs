use std::path::Path;

use packlet_test_utils::Tester;

pub fn check_fixture(test_config_path: &Path) {
  let tester = Tester::from_config_path(test_config_path);
  let expect = &tester.config.expect;

  match packlet::resolve_config(tester.config_options()) {
    Ok(config) => {
      assert_eq!(
        expect.error_code, None,
        "expected a {:?} failure but resolution succeeded",
        expect.error_code
      );

      if let Some(expected_plugins) = &expect.plugins {
        let names = config
          .plugins()
          .iter()
          .map(|plugin| plugin.name().to_string())
          .collect::<Vec<_>>();
        assert_eq!(&names, expected_plugins);
      }

      if let Some(expected_alias) = &expect.alias {
        assert_eq!(config.alias().len(), expected_alias.len());
        for (find, target) in expected_alias {
          let resolved = config
            .alias()
            .get(find)
            .map(|path| path.to_string_lossy().to_string());
          assert_eq!(resolved.as_deref(), Some(target.as_str()), "alias \"{find}\"");
        }
      }

      if let Some(expected_define) = &expect.define {
        assert_eq!(config.define().len(), expected_define.len());
        for (name, value) in expected_define {
          assert_eq!(config.define().get(name), Some(value), "define \"{name}\"");
        }
      }

      if let Some(expected_base) = &expect.base {
        assert_eq!(config.base(), expected_base);
      }
    }
    Err(err) => match expect.error_code.as_deref() {
      Some(code) => assert_eq!(err.code(), code),
      None => panic!("unexpected failure: {err}"),
    },
  }

  if let Some(expected_warnings) = expect.warnings {
    assert_eq!(tester.warnings.lock().unwrap().len(), expected_warnings);
  }
}
