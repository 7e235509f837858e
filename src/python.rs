use std::str::FromStr;
use std::sync::Mutex;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use reqwest::Method;
use serde_json::Value;

use crate::{BlockingAircallClient, ContentType, Credentials};

#[pyclass(name = "OperationDefinition", get_all)]
pub struct PyOperationDefinition {
    pub operation_id: String,
    pub method: String,
    pub path_template: String,
    pub path_params: Vec<String>,
}

#[pyclass(name = "Client")]
pub struct PyClient {
    inner: Mutex<BlockingAircallClient>,
}

#[pymethods]
impl PyClient {
    #[new]
    #[pyo3(signature = (api_id, api_token, base_url=None, form=false))]
    fn new(
        api_id: String,
        api_token: String,
        base_url: Option<String>,
        form: bool,
    ) -> PyResult<Self> {
        let mut client = BlockingAircallClient::new(Credentials::new(api_id, api_token))
            .map_err(to_py_value_error)?;
        if let Some(url) = base_url {
            client = client.with_base_url(url).map_err(to_py_value_error)?;
        }
        if form {
            client = client.with_content_type(ContentType::Form);
        }

        Ok(Self {
            inner: Mutex::new(client),
        })
    }

    #[staticmethod]
    fn operations() -> Vec<PyOperationDefinition> {
        BlockingAircallClient::operations()
            .iter()
            .map(|op| PyOperationDefinition {
                operation_id: op.operation_id.to_owned(),
                method: op.method.to_owned(),
                path_template: op.path_template.to_owned(),
                path_params: op
                    .path_params
                    .iter()
                    .map(|value| (*value).to_owned())
                    .collect(),
            })
            .collect()
    }

    fn ping(&self) -> PyResult<String> {
        self.call_operation("ping".to_owned(), None, None)
    }

    #[pyo3(signature = (method, route, params_json=None))]
    fn request(
        &self,
        method: String,
        route: String,
        params_json: Option<String>,
    ) -> PyResult<String> {
        let parsed_method = Method::from_str(&method)
            .map_err(|e| PyValueError::new_err(format!("invalid HTTP method: {e}")))?;
        let params = parse_params_arg(params_json)?;

        let client = self
            .inner
            .lock()
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
        let value = client
            .request_json(parsed_method, &route, &params)
            .map_err(to_py_runtime_error)?;

        Ok(value.to_string())
    }

    #[pyo3(signature = (operation_id, path_params_json=None, params_json=None))]
    fn call_operation(
        &self,
        operation_id: String,
        path_params_json: Option<String>,
        params_json: Option<String>,
    ) -> PyResult<String> {
        let path_pairs = parse_path_params_arg(path_params_json)?;
        let borrowed_path: Vec<(&str, &str)> = path_pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        let params = parse_params_arg(params_json)?;

        let client = self
            .inner
            .lock()
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
        let value = client
            .call_operation(&operation_id, &borrowed_path, &params)
            .map_err(to_py_runtime_error)?;

        Ok(value.to_string())
    }
}

#[pymodule]
fn aircall_client(_py: Python<'_>, module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PyOperationDefinition>()?;
    module.add_class::<PyClient>()?;
    Ok(())
}

fn to_py_value_error(error: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(error.to_string())
}

fn to_py_runtime_error(error: impl std::fmt::Display) -> PyErr {
    PyRuntimeError::new_err(error.to_string())
}

fn parse_params_arg(raw_json: Option<String>) -> PyResult<Value> {
    raw_json.map_or(Ok(Value::Null), |raw| {
        serde_json::from_str(&raw).map_err(to_py_value_error)
    })
}

fn parse_path_params_arg(raw_json: Option<String>) -> PyResult<Vec<(String, String)>> {
    let Some(raw_json) = raw_json else {
        return Ok(Vec::new());
    };

    let value: Value = serde_json::from_str(&raw_json).map_err(to_py_value_error)?;
    let object = value
        .as_object()
        .ok_or_else(|| PyValueError::new_err("expected a JSON object"))?;

    Ok(object
        .iter()
        .map(|(key, value)| {
            let rendered = match value.as_str() {
                Some(as_str) => as_str.to_owned(),
                None => value.to_string(),
            };
            (key.to_owned(), rendered)
        })
        .collect())
}
