//! Các bước của tour giới thiệu lần đầu.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TourStep {
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: Vec<&'static str>,
}

pub fn tour_steps() -> Vec<TourStep> {
    vec![
        TourStep {
            title: "Bem-vindo ao VidaPlus!",
            description: "Sistema de Gestão Hospitalar e de Serviços de Saúde",
            highlights: vec!["Conforme LGPD", "100% Seguro", "Focado em Saúde"],
        },
        TourStep {
            title: "Principais Funcionalidades",
            description: "Tudo que você precisa em um só lugar",
            highlights: vec![
                "Agendamentos",
                "Telemedicina",
                "Prontuário Eletrônico",
                "Home Care",
            ],
        },
        TourStep {
            title: "Segurança e Privacidade",
            description: "Seus dados estão seguros conosco",
            highlights: vec![
                "Criptografia de Ponta a Ponta",
                "Conformidade LGPD",
                "Auditoria Completa",
                "Autenticação 2FA",
            ],
        },
        TourStep {
            title: "Tudo Pronto!",
            description: "Comece a usar o sistema agora",
            highlights: vec!["Documentação", "Tutoriais", "Suporte"],
        },
    ]
}

/// Con trỏ bước hiện tại. Không bao giờ vượt ra ngoài danh sách.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TourCursor {
    index: usize,
    total: usize,
}

impl TourCursor {
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }

    /// Tiến một bước; trả về `false` khi đã ở bước cuối (lúc đó tour nên kết thúc).
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Phần trăm tiến độ, tính cả bước hiện tại.
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        (((self.index + 1) * 100) / self.total).min(100) as u8
    }
}
