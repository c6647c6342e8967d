// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Text shown to the user by the registration form (pt-BR)

use signup_shared::validation::ValidationFailure;

pub const INVALID_EMAIL: &str = "Digite um e-mail válido.";
pub const PASSWORD_TOO_SHORT: &str = "A senha precisa ter pelo menos 8 caracteres.";
pub const PASSWORD_MISMATCH: &str = "As senhas não são iguais.";
pub const USER_ALREADY_REGISTERED: &str = "Esse e-mail já está registrado. Tente ir para o login.";

pub const FORM_TITLE: &str = "Cadastro";
pub const FORM_DESCRIPTION: &str = "Insira seus dados para se cadastrar.";
pub const EMAIL_LABEL: &str = "Email";
pub const EMAIL_PLACEHOLDER: &str = "seu@email.com.br";
pub const PASSWORD_LABEL: &str = "Senha";
pub const CONFIRM_PASSWORD_LABEL: &str = "Repita a senha";
pub const ERROR_HEADING: &str = "Erro no formulário";
pub const SUCCESS_HEADING: &str = "Cadastro realizado";
pub const SUCCESS_MESSAGE: &str = "Sua conta foi criada com sucesso.";
pub const SUBMIT_LABEL: &str = "Cadastrar";
pub const LOGIN_LINK: &str = "Ir para o login";

pub fn validation_message(failure: ValidationFailure) -> &'static str {
	match failure {
		ValidationFailure::InvalidEmail => INVALID_EMAIL,
		ValidationFailure::PasswordTooShort => PASSWORD_TOO_SHORT,
		ValidationFailure::PasswordMismatch => PASSWORD_MISMATCH,
	}
}
