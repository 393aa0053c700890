use crate::schema::RolePreset;

pub const ADMIN_ROLE: &str = "Administrador";
pub const SALES_MANAGER_ROLE: &str = "Jefe de Ventas";
pub const SELLER_ROLE: &str = "Vendedor";

pub static ROLE_PRESETS: [RolePreset; 3] = [
    RolePreset {
        name: ADMIN_ROLE,
        permissions: &[
            "crear_usuarios",
            "editar_usuarios",
            "eliminar_usuarios",
            "ver_usuarios",
            "crear_productos",
            "editar_productos",
            "ver_productos",
            "registrar_clientes",
            "ver_clientes",
            "editar_clientes",
            "emitir_facturas",
            "ver_facturas",
            "anular_factura",
            "generar_pdf_factura",
            "ver_reportes",
        ],
    },
    RolePreset {
        name: SALES_MANAGER_ROLE,
        permissions: &[
            "crear_usuarios",
            "ver_usuarios",
            "crear_productos",
            "editar_productos",
            "ver_productos",
            "registrar_clientes",
            "ver_clientes",
            "editar_clientes",
            "emitir_facturas",
            "ver_facturas",
            "ver_reportes",
        ],
    },
    RolePreset {
        name: SELLER_ROLE,
        permissions: &[
            "registrar_clientes",
            "ver_clientes",
            "ver_productos",
            "emitir_facturas",
            "ver_facturas",
        ],
    },
];

pub fn find_role(role: &str) -> Option<&'static RolePreset> {
    let role = role.trim();
    ROLE_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(role))
}

/// Permissions assigned to a new user of `role` when none are given explicitly.
/// Unknown roles start with no permissions.
pub fn default_permissions(role: &str) -> Vec<String> {
    find_role(role)
        .map(|preset| preset.permissions.iter().map(|p| p.to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_permissions() {
        assert_eq!(default_permissions("Administrador").len(), 15);
        assert_eq!(default_permissions("jefe de ventas").len(), 11);
        assert_eq!(
            default_permissions(" Vendedor "),
            vec![
                "registrar_clientes",
                "ver_clientes",
                "ver_productos",
                "emitir_facturas",
                "ver_facturas",
            ]
        );
        assert!(default_permissions("Cajero").is_empty());
    }
}
