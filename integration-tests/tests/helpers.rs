#![allow(dead_code)]

use std::fmt::Display;

use anyhow::Result as AnyResult;
use cw_multi_test::AppResponse;
use maneki_token::ContractError;

pub fn assert_err(res: AnyResult<AppResponse>, err: ContractError) {
    match res {
        Ok(_) => panic!("Result was not an error"),
        Err(generic_err) => {
            let contract_err: ContractError = generic_err.downcast().unwrap();
            assert_eq!(contract_err, err);
        }
    }
}

pub fn assert_dex_err(res: AnyResult<AppResponse>, err: maneki_mock_dex::ContractError) {
    match res {
        Ok(_) => panic!("Result was not an error"),
        Err(generic_err) => {
            let contract_err: maneki_mock_dex::ContractError = generic_err.downcast().unwrap();
            assert_eq!(contract_err, err);
        }
    }
}

/// Errors raised by a contract further down the call stack keep their text
/// but not their type, so match on the text
pub fn assert_err_contains(res: AnyResult<AppResponse>, expected: impl Display) {
    match res {
        Ok(_) => panic!("Result was not an error"),
        Err(generic_err) => {
            let text = generic_err.root_cause().to_string();
            let expected = expected.to_string();
            assert!(text.contains(&expected), "{text:?} does not contain {expected:?}");
        }
    }
}
