//! Shared fixtures for the integration, unit and property suites.

use busca::dataset::Dataset;
use busca::testing::make_dataset;

/// A small but realistic municipal project dataset: IT and construction
/// projects only, so agricultural queries have nothing to latch onto.
pub fn projects_dataset() -> Dataset {
    make_dataset(&[
        (
            "P-001",
            "Sistema de Gestão",
            "Desenvolvimento de sistema de gestão integrada para a prefeitura",
            150_000.0,
        ),
        (
            "P-002",
            "Reforma Predial",
            "Reforma completa do prédio administrativo central",
            85_000.0,
        ),
        (
            "P-003",
            "Compra Equipamentos",
            "Aquisição de equipamentos de informática para o escritório",
            45_000.0,
        ),
        (
            "P-004",
            "Rede Elétrica",
            "Manutenção da rede elétrica dos galpões municipais",
            32_000.0,
        ),
        (
            "P-005",
            "Quadra Esportiva",
            "Construção de quadra esportiva coberta na escola municipal",
            120_000.0,
        ),
        (
            "P-006",
            "Portal Transparência",
            "Modernização do portal de transparência e dados abertos",
            60_000.0,
        ),
    ])
}

/// CSV content using the canonical Portuguese headers.
pub fn sample_csv() -> String {
    "ID do Projeto,Nome do Projeto,Descrição,Custo proposto\n\
     1,Sistema de Gestão,Desenvolvimento de sistema de gestão integrada,150000.00\n\
     2,Reforma Predial,Reforma completa do prédio administrativo,85000.00\n\
     3,Compra Equipamentos,Aquisição de equipamentos de informática,\"1.234,56\"\n"
        .to_string()
}
