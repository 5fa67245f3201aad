use super::{interpolate, Locale};

#[derive(Debug, Clone, Copy)]
pub enum Message<'a> {
    // Single file analysis
    NotFound { file: &'a str },
    InvalidFileType,
    NotReactFile,
    ExpoProjectDetected,
    Analyzing { file: &'a str },
    AnalysisComplete,
    Summarizing,
    SummaryComplete,
    ApiKeyNotFound { env: &'a str },
    UsageInteractive,
    UsageDirect,

    // Scorecard
    ScorecardTitle,
    Score,
    Issues,
    Improvement,

    // Reports
    ReportsSavedIn,
    ReportTitle,
    ReportFile,
    ReportModel,
    ReportDate,
    ReportTool,
    ReportBefore,
    ReportAfter,
    ReportCode,
    ReportFooter,

    // Batch
    AnalyzingFiles { count: usize },
    ParallelMode,
    SequentialMode,
    FileProgress { index: usize, total: usize, file: &'a str },
    Waiting { seconds: f64 },
    ConsolidatedTitle,
    FilesAnalyzed { count: usize },
    Succeeded { count: usize },
    Failed { count: usize },
    FinishedAt { time: &'a str },

    // Config
    ConfigCreated { path: &'a str },
    ConfigExists { path: &'a str },

    // Wizard
    WizardTitle,
    ChooseTarget,
    TargetScreen,
    TargetComponent,
    TargetService,
    TargetUtil,
    TargetCustom,
    TargetMultiple,
    EnterPath,
    EmptyPath,
    ChooseFile { dir: &'a str },
    ChooseFiles { dir: &'a str },
    NoFilesFound { dir: &'a str },
    InvalidChoice { max: usize },
    UseDefaults { model: &'a str, language: &'a str, project: &'a str },
    ChooseModel,
    ChooseLanguage,
    ProjectType,
    ProjectVersion,
    RunInParallel,
    StartingAnalysis,
    SelectedFile { file: &'a str },
    SelectedModel { model: &'a str },
    SelectedLanguage { language: &'a str },
    SelectedProject { project: &'a str, version: &'a str },
}

impl Locale {
    pub fn text(&self, message: Message<'_>) -> String {
        match message {
            Message::NotFound { file } => interpolate(
                self.pick("File not found: {file}", "Arquivo não encontrado: {file}"),
                &[("file", file)],
            ),
            Message::InvalidFileType => self.pick(
                "Unsupported file type. Use .ts, .tsx, .js or .jsx",
                "Tipo de arquivo não suportado. Use .ts, .tsx, .js ou .jsx",
            ).to_string(),
            Message::NotReactFile => self.pick(
                "This file does not seem to use React. The analysis may be less accurate.",
                "Este arquivo não parece usar React. A análise pode ser menos precisa.",
            ).to_string(),
            Message::ExpoProjectDetected => self.pick(
                "Expo project detected",
                "Projeto Expo detectado",
            ).to_string(),
            Message::Analyzing { file } => interpolate(
                self.pick("Analyzing {file}", "Analisando {file}"),
                &[("file", file)],
            ),
            Message::AnalysisComplete => self.pick("Analysis complete", "Análise concluída").to_string(),
            Message::Summarizing => self.pick("Building terminal summary", "Gerando resumo").to_string(),
            Message::SummaryComplete => self.pick("Summary ready", "Resumo pronto").to_string(),
            Message::ApiKeyNotFound { env } => interpolate(
                self.pick("{env} not found", "{env} não encontrada"),
                &[("env", env)],
            ),
            Message::UsageInteractive => self.pick(
                "💡 Use 'rn-ai-optimize analyze' for interactive mode",
                "💡 Use 'rn-ai-optimize analyze' para o modo interativo",
            ).to_string(),
            Message::UsageDirect => self.pick(
                "📚 Or use: rn-ai-optimize <file>",
                "📚 Ou use: rn-ai-optimize <arquivo>",
            ).to_string(),

            Message::ScorecardTitle => self.pick("Code Quality Report", "Relatório de Qualidade").to_string(),
            Message::Score => self.pick("Score", "Nota").to_string(),
            Message::Issues => self.pick("Issues", "Problemas").to_string(),
            Message::Improvement => self.pick("Improvement", "Melhoria").to_string(),

            Message::ReportsSavedIn => self.pick("Reports saved in", "Relatórios salvos em").to_string(),
            Message::ReportTitle => self.pick("Optimization Report", "Relatório de Otimização").to_string(),
            Message::ReportFile => self.pick("File", "Arquivo").to_string(),
            Message::ReportModel => self.pick("Model", "Modelo").to_string(),
            Message::ReportDate => self.pick("Date", "Data").to_string(),
            Message::ReportTool => self.pick("Tool", "Ferramenta").to_string(),
            Message::ReportBefore => self.pick("Before", "Antes").to_string(),
            Message::ReportAfter => self.pick("After", "Depois").to_string(),
            Message::ReportCode => self.pick("Code", "Código").to_string(),
            Message::ReportFooter => self.pick("Report generated by", "Relatório gerado por").to_string(),

            Message::AnalyzingFiles { count } => interpolate(
                self.pick("Analyzing {count} file(s)...", "Analisando {count} arquivo(s)..."),
                &[("count", &count.to_string())],
            ),
            Message::ParallelMode => self.pick(
                "⚡ Batch mode enabled - processing all files at once...",
                "⚡ Modo batch ativado - processando todos os arquivos...",
            ).to_string(),
            Message::SequentialMode => self.pick(
                "🐢 Sequential mode - one file at a time",
                "🐢 Modo sequencial - um arquivo por vez",
            ).to_string(),
            Message::FileProgress { index, total, file } => interpolate(
                self.pick("[{index}/{total}] 📄 Analyzing: {file}", "[{index}/{total}] 📄 Analisando: {file}"),
                &[("index", &index.to_string()), ("total", &total.to_string()), ("file", file)],
            ),
            Message::Waiting { seconds } => interpolate(
                self.pick("⏳ Waiting {seconds} seconds...", "⏳ Aguardando {seconds} segundos..."),
                &[("seconds", &seconds.to_string())],
            ),
            Message::ConsolidatedTitle => self.pick("Consolidated Report", "Relatório Consolidado").to_string(),
            Message::FilesAnalyzed { count } => interpolate(
                self.pick("Files analyzed: {count}", "Arquivos analisados: {count}"),
                &[("count", &count.to_string())],
            ),
            Message::Succeeded { count } => interpolate(
                self.pick("Succeeded: {count}", "Concluídos: {count}"),
                &[("count", &count.to_string())],
            ),
            Message::Failed { count } => interpolate(
                self.pick("Failed: {count}", "Com falha: {count}"),
                &[("count", &count.to_string())],
            ),
            Message::FinishedAt { time } => interpolate(
                self.pick("Finished at: {time}", "Finalizado em: {time}"),
                &[("time", time)],
            ),

            Message::ConfigCreated { path } => interpolate(
                self.pick("Configuration file created: {path}", "Arquivo de configuração criado: {path}"),
                &[("path", path)],
            ),
            Message::ConfigExists { path } => interpolate(
                self.pick(
                    "Configuration file already exists: {path} (use --force to overwrite)",
                    "Arquivo de configuração já existe: {path} (use --force para sobrescrever)",
                ),
                &[("path", path)],
            ),

            Message::WizardTitle => self.pick(
                "🤖 rn-ai-optimize - Interactive Mode",
                "🤖 rn-ai-optimize - Modo Interativo",
            ).to_string(),
            Message::ChooseTarget => self.pick(
                "What kind of file do you want to analyze?",
                "Que tipo de arquivo você quer analisar?",
            ).to_string(),
            Message::TargetScreen => self.pick("🖥️  Screen", "🖥️  Tela (Screen)").to_string(),
            Message::TargetComponent => self.pick("🧩 Component", "🧩 Componente").to_string(),
            Message::TargetService => self.pick("🔧 Service", "🔧 Serviço").to_string(),
            Message::TargetUtil => self.pick("🛠️  Utility", "🛠️  Utilitário").to_string(),
            Message::TargetCustom => self.pick("📁 Specific file", "📁 Arquivo específico").to_string(),
            Message::TargetMultiple => self.pick("📚 Multiple files", "📚 Vários arquivos").to_string(),
            Message::EnterPath => self.pick("Enter the file path:", "Digite o caminho do arquivo:").to_string(),
            Message::EmptyPath => self.pick("Please enter a path", "Por favor, digite um caminho").to_string(),
            Message::ChooseFile { dir } => interpolate(
                self.pick("Choose the file in {dir}:", "Escolha o arquivo em {dir}:"),
                &[("dir", dir)],
            ),
            Message::ChooseFiles { dir } => interpolate(
                self.pick(
                    "Choose the files in {dir} (comma separated, e.g. 1,3):",
                    "Escolha os arquivos em {dir} (separados por vírgula, ex.: 1,3):",
                ),
                &[("dir", dir)],
            ),
            Message::NoFilesFound { dir } => interpolate(
                self.pick("No files found in {dir}", "Nenhum arquivo encontrado em {dir}"),
                &[("dir", dir)],
            ),
            Message::InvalidChoice { max } => interpolate(
                self.pick("Enter a number between 1 and {max}", "Digite um número entre 1 e {max}"),
                &[("max", &max.to_string())],
            ),
            Message::UseDefaults { model, language, project } => interpolate(
                self.pick(
                    "Use default settings? ({model}, {language}, {project})",
                    "Usar configurações padrão? ({model}, {language}, {project})",
                ),
                &[("model", model), ("language", language), ("project", project)],
            ),
            Message::ChooseModel => self.pick("Choose the model:", "Escolha o modelo:").to_string(),
            Message::ChooseLanguage => self.pick("Choose the language:", "Escolha o idioma:").to_string(),
            Message::ProjectType => self.pick("Project type:", "Tipo do projeto:").to_string(),
            Message::ProjectVersion => self.pick("Project version:", "Versão do projeto:").to_string(),
            Message::RunInParallel => self.pick(
                "Analyze all files at once? (No = one at a time with a pause)",
                "Analisar todos os arquivos de uma vez? (Não = um por vez com pausa)",
            ).to_string(),
            Message::StartingAnalysis => self.pick("🔄 Starting analysis...", "🔄 Iniciando análise...").to_string(),
            Message::SelectedFile { file } => interpolate(
                self.pick("📄 File: {file}", "📄 Arquivo: {file}"),
                &[("file", file)],
            ),
            Message::SelectedModel { model } => interpolate(
                self.pick("🤖 Model: {model}", "🤖 Modelo: {model}"),
                &[("model", model)],
            ),
            Message::SelectedLanguage { language } => interpolate(
                self.pick("🌍 Language: {language}", "🌍 Idioma: {language}"),
                &[("language", language)],
            ),
            Message::SelectedProject { project, version } => interpolate(
                self.pick("📱 Project: {project} v{version}", "📱 Projeto: {project} v{version}"),
                &[("project", project), ("version", version)],
            ),
        }
    }
}
