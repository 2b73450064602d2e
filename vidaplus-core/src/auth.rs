//! Danh bạ tài khoản demo và bước kiểm tra đăng nhập.
//!
//! Đây chỉ là bộ thu thập identity cho bản prototype, không phải xác thực thật:
//! mọi mật khẩu đều được chấp nhận nếu e-mail trùng một tài khoản demo.

use crate::identity::{Identity, Role};
use crate::ShellError;

/// Ba tài khoản demo, mỗi vai trò một tài khoản.
pub fn demo_accounts() -> Vec<Identity> {
    [Role::Professional, Role::Patient, Role::Admin]
        .into_iter()
        .map(quick_login)
        .collect()
}

/// Tài khoản demo của một vai trò (nút "acesso rápido").
pub fn quick_login(role: Role) -> Identity {
    match role {
        Role::Professional => Identity {
            id: "1".to_string(),
            name: "Dr. Carlos Silva".to_string(),
            email: "carlos.silva@vidaplus.com".to_string(),
            role: Role::Professional,
            cpf: "123.456.789-00".to_string(),
            phone: "(11) 98765-4321".to_string(),
            avatar: None,
            specialty: Some("Cardiologia".to_string()),
            crm: Some("CRM/SP 123456".to_string()),
        },
        Role::Patient => Identity {
            id: "2".to_string(),
            name: "Maria Santos".to_string(),
            email: "maria.santos@email.com".to_string(),
            role: Role::Patient,
            cpf: "987.654.321-00".to_string(),
            phone: "(11) 91234-5678".to_string(),
            avatar: None,
            specialty: None,
            crm: None,
        },
        Role::Admin => Identity {
            id: "3".to_string(),
            name: "Admin Sistema".to_string(),
            email: "admin@vidaplus.com".to_string(),
            role: Role::Admin,
            cpf: "111.222.333-44".to_string(),
            phone: "(11) 3000-0000".to_string(),
            avatar: None,
            specialty: None,
            crm: None,
        },
    }
}

/// Tìm tài khoản theo e-mail (phân biệt hoa thường). Mật khẩu bị bỏ qua.
pub fn authenticate(email: &str, _password: &str) -> Result<Identity, ShellError> {
    demo_accounts()
        .into_iter()
        .find(|account| account.email == email)
        .ok_or(ShellError::InvalidCredentials)
}
